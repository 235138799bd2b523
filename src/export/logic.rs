// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::Stores;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export attendance records.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   their `start:end` forms
    ///
    /// Returns the number of records written.
    pub fn export(
        stores: &Stores,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) => parse_range(r)?,
        };

        let records = stores.attendance.list(bounds)?;

        if records.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        stores.ttlog(
            "export",
            file,
            &format!("{} record(s) exported as {}", records.len(), format.as_str()),
        );

        Ok(records.len())
    }
}
