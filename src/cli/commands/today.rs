use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::SummaryRow;
use crate::store::Stores;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { date: day, json } = cmd {
        let day = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let stores = Stores::open(cfg)?;
        let rows = stores.attendance.today_summary(day)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            info(format!("No attendance records for {day}."));
            return Ok(());
        }

        header(format!("Attendance for {day}"));
        print!("{}", render_summary(&rows));
    }

    Ok(())
}

fn render_summary(rows: &[SummaryRow]) -> String {
    let mut table = Table::new(["ID", "Name", "Total", "Breakfast", "Lunch"]);
    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.name.clone(),
            r.stats.total.to_string(),
            r.stats.breakfast.to_string(),
            r.stats.lunch.to_string(),
        ]);
    }
    table.render()
}
