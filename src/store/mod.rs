//! CSV-backed record stores.
//!
//! Each table owns its file: every operation reads the file in full and
//! either appends a row or rewrites the file. There is no locking; a single
//! writer is assumed.

pub mod attendance;
pub mod log;
pub mod roster;
pub mod table;

pub use attendance::{ATTENDANCE_HEADER, AttendanceStore};
pub use roster::{ROSTER_HEADER, RosterStore};
pub use table::LoadStatus;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// Both tables plus the audit file, opened from the configuration.
pub struct Stores {
    pub roster: RosterStore,
    pub attendance: AttendanceStore,
    pub log_file: PathBuf,
}

impl Stores {
    /// Build the stores and run the load-with-repair check on the audit file
    /// and both tables.
    /// A reset is reported as a warning and recorded in the audit log.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let stores = Self::unchecked(cfg);

        // The audit file goes first so reset entries below land in a valid log.
        let log_status = stores.check_log()?;
        stores.report_reset("Audit log", &stores.log_file.display().to_string(), &log_status);

        let roster_status = stores.roster.ensure_loadable()?;
        stores.report_reset("Student", &stores.roster.path().display().to_string(), &roster_status);

        let attendance_status = stores.attendance.ensure_loadable()?;
        stores.report_reset(
            "Attendance",
            &stores.attendance.path().display().to_string(),
            &attendance_status,
        );

        Ok(stores)
    }

    /// Load-with-repair on the audit file.
    pub fn check_log(&self) -> AppResult<LoadStatus> {
        log::ensure_log(&self.log_file)
    }

    /// Build the stores without touching the files.
    pub fn unchecked(cfg: &Config) -> Self {
        Self {
            roster: RosterStore::new(&cfg.students_file),
            attendance: AttendanceStore::new(&cfg.attendance_file),
            log_file: PathBuf::from(&cfg.log_file),
        }
    }

    /// Audit log write; failures are reported but never abort the command.
    pub fn ttlog(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = log::ttlog(&self.log_file, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    fn report_reset(&self, label: &str, target: &str, status: &LoadStatus) {
        if let LoadStatus::Reset(reason) = status {
            warning(format!("{label} file was reset due to an error ({reason})."));
            self.ttlog("reset", target, reason);
        }
    }
}
