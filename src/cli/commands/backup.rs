use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::Stores;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        dir,
        compress,
        force,
    } = cmd
    {
        let stores = Stores::open(cfg)?;
        for path in BackupLogic::backup(&stores, dir, *compress, *force)? {
            success(format!("Backup created: {}", path.display()));
        }
    }

    Ok(())
}
