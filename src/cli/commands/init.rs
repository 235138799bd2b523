use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{LoadStatus, Stores};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the roster and attendance files (header only, or repaired)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    info("Initializing messlog…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }

    let stores = Stores::unchecked(cfg);
    let roster_status = stores.roster.ensure_loadable()?;
    report("Students", stores.roster.path(), &roster_status);
    let attendance_status = stores.attendance.ensure_loadable()?;
    report("Attendance", stores.attendance.path(), &attendance_status);

    stores.ttlog(
        "init",
        "",
        &format!(
            "Data files initialized at {} and {}",
            cfg.students_file, cfg.attendance_file
        ),
    );

    success("messlog initialization completed!");
    Ok(())
}

fn report(label: &str, path: &Path, status: &LoadStatus) {
    let state = if status.is_reset() { "created" } else { "existing" };
    info(format!("{label:<10} : {} ({state})", path.display()));
}
