//! Shared CSV table helpers: header check, reset-on-corruption, full
//! read, full rewrite and append.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Outcome of [`ensure_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Ok,
    /// The file was missing or malformed and has been replaced by an empty
    /// table. Carries the reason.
    Reset(String),
}

impl LoadStatus {
    pub fn is_reset(&self) -> bool {
        matches!(self, LoadStatus::Reset(_))
    }
}

/// Verify that `path` holds a table with exactly `header` and that every
/// row deserializes as `T`. Anything else resets the file.
pub(crate) fn ensure_table<T: DeserializeOwned>(
    path: &Path,
    header: &[&str],
) -> AppResult<LoadStatus> {
    let reason = if !path.exists() {
        "file not found".to_string()
    } else {
        match read_rows::<T>(path, header) {
            Ok(_) => return Ok(LoadStatus::Ok),
            Err(e) => e.to_string(),
        }
    };

    reset_table(path, header)?;
    Ok(LoadStatus::Reset(reason))
}

/// Overwrite `path` with an empty table (header only).
pub(crate) fn reset_table(path: &Path, header: &[&str]) -> AppResult<()> {
    write_rows::<()>(path, header, &[])
}

/// Read all rows, failing with [`AppError::FileCorrupt`] on a header
/// mismatch or an unparsable row.
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path, header: &[&str]) -> AppResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let found = rdr.headers()?.clone();
    if found.iter().ne(header.iter().copied()) {
        return Err(AppError::FileCorrupt(format!(
            "{}: expected header '{}', found '{}'",
            path.display(),
            header.join(","),
            found.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut rows = Vec::new();
    for (line, row) in rdr.deserialize::<T>().enumerate() {
        let row = row.map_err(|e| {
            AppError::FileCorrupt(format!("{}: row {}: {e}", path.display(), line + 1))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Rewrite the whole table.
pub(crate) fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(header)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Append a single row to an existing table. A missing final line
/// terminator is restored first so the new row starts on its own line.
pub(crate) fn append_row<T: Serialize>(path: &Path, row: &T) -> AppResult<()> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;

    let len = file.metadata()?.len();
    if len > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::Start(len - 1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            file.write_all(b"\n")?;
        }
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}
