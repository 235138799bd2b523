use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Stores;
use crate::ui::messages::info;
use crate::utils::date::parse_range;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { students, range } = cmd {
        let stores = Stores::open(cfg)?;

        let table = if *students {
            let mut t = Table::new(["ID", "Name"]);
            for s in stores.roster.list()? {
                t.add_row(vec![s.id.to_string(), s.name]);
            }
            t
        } else {
            let bounds = match range {
                Some(r) => parse_range(r)?,
                None => None,
            };

            let mut t = Table::new(["ID", "Name", "Meal", "Date", "Time"]);
            for r in stores.attendance.list(bounds)? {
                t.add_row(vec![
                    r.id.to_string(),
                    r.name.clone(),
                    r.meal.to_string(),
                    r.date_str(),
                    r.time_str(),
                ]);
            }
            t
        };

        if table.is_empty() {
            info("Nothing to show.");
        } else {
            print!("{}", table.render());
        }
    }

    Ok(())
}
