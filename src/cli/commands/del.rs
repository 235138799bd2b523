use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::Stores;
use crate::ui::messages::{confirm, info, success};
use crate::utils::input::parse_student_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let id = parse_student_id(id)?;
        let stores = Stores::open(cfg)?;

        let student = stores
            .roster
            .find_by_id(id)?
            .ok_or(AppError::NotFound(id))?;

        success(format!("Student Found: {}", student.name));

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete {} (ID {}) and all related attendance records? This action is irreversible.",
            student.name, student.id
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let (student, removed) = DeleteLogic::apply(&stores, id)?;
        success(format!(
            "Student '{}' and all related attendance records ({}) have been deleted.",
            student.name, removed
        ));
    }

    Ok(())
}
