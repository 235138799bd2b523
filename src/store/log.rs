//! Audit trail (`date,operation,target,message`).

use super::table::{self, LoadStatus};
use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_HEADER: [&str; 4] = ["date", "operation", "target", "message"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Check the audit file once per process. A missing file is simply
/// created; a malformed one is reset.
pub fn ensure_log(path: &Path) -> AppResult<LoadStatus> {
    if !path.exists() {
        table::reset_table(path, &LOG_HEADER)?;
        return Ok(LoadStatus::Ok);
    }
    table::ensure_table::<LogEntry>(path, &LOG_HEADER)
}

/// Write an internal log line into the audit file. The file is only
/// created here when missing; validation happens in [`ensure_log`].
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if !path.exists() {
        table::reset_table(path, &LOG_HEADER)?;
    }

    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    table::append_row(path, &entry)
}

pub fn load_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    table::read_rows(path, &LOG_HEADER)
}
