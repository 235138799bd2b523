use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mark::MarkLogic;
use crate::errors::AppResult;
use crate::store::Stores;
use crate::ui::messages::success;
use crate::utils::input::{parse_meal, parse_student_id};
use crate::utils::time::{now, parse_optional_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { id, meal, at } = cmd {
        //
        // 1. Parse operator input before touching the files
        //
        let id = parse_student_id(id)?;
        let meal = parse_meal(meal)?;
        let at = parse_optional_timestamp(at.as_ref())?.unwrap_or_else(now);

        //
        // 2. Append the record
        //
        let stores = Stores::open(cfg)?;
        let record = MarkLogic::apply(&stores, id, meal, at)?;

        success(format!(
            "Attendance marked for {} ({}) on {} at {}",
            record.name,
            record.meal,
            record.date_str(),
            record.time_str()
        ));
    }

    Ok(())
}
