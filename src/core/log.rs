use crate::errors::AppResult;
use crate::store::{LoadStatus, Stores};
use crate::store::log::load_log;
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;
use ansi_term::Colour;

/// Colour of the operation column.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "mark" => Colour::Cyan,
        "del" => Colour::Red,
        "reset" => Colour::Yellow,
        "backup" => Colour::Blue,
        "export" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(stores: &Stores) -> AppResult<()> {
        if let LoadStatus::Reset(reason) = stores.check_log()? {
            warning(format!("Audit log file was reset due to an error ({reason})."));
        }

        let entries = load_log(&stores.log_file)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(["#", "Date", "Operation", "Message"]);
        for (i, e) in entries.iter().enumerate() {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            table.add_row(vec![
                (i + 1).to_string(),
                date,
                color_for_operation(&e.operation)
                    .paint(op_target)
                    .to_string(),
                e.message.clone(),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
