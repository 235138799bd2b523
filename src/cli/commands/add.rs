use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::Stores;
use crate::ui::messages::success;

/// Register a student.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let stores = Stores::open(cfg)?;
        let student = AddLogic::apply(&stores, name)?;

        success(format!(
            "Student '{}' added with ID: {}",
            student.name, student.id
        ));
    }

    Ok(())
}
