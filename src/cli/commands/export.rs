use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Stores;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let stores = Stores::open(cfg)?;
        ExportLogic::export(&stores, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
