use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search::SearchLogic;
use crate::errors::AppResult;
use crate::store::Stores;
use crate::ui::messages::{info, success};
use crate::utils::input::parse_student_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { id } = cmd {
        let id = parse_student_id(id)?;
        let stores = Stores::open(cfg)?;

        let (student, stats) = SearchLogic::lookup(&stores, id)?;

        success(format!("Student Found: {} (ID {})", student.name, student.id));
        info(format!(
            "Total Attendances: {} | Breakfast: {} | Lunch: {}",
            stats.total, stats.breakfast, stats.lunch
        ));
    }

    Ok(())
}
