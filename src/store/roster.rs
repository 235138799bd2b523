//! Student roster (`ID,Name`).

use super::table::{self, LoadStatus};
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use std::path::{Path, PathBuf};

pub const ROSTER_HEADER: [&str; 2] = ["ID", "Name"];

pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the roster file and reset it to an empty table if it is missing
    /// or malformed. Idempotent.
    pub fn ensure_loadable(&self) -> AppResult<LoadStatus> {
        table::ensure_table::<Student>(&self.path, &ROSTER_HEADER)
    }

    /// All students, in file order.
    pub fn list(&self) -> AppResult<Vec<Student>> {
        table::read_rows(&self.path, &ROSTER_HEADER)
    }

    /// Exact, case-sensitive match on the trimmed name.
    pub fn find_by_name(&self, name: &str) -> AppResult<bool> {
        let name = name.trim();
        Ok(self.list()?.iter().any(|s| s.name == name))
    }

    pub fn find_by_id(&self, id: u32) -> AppResult<Option<Student>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }

    /// Register a new student. The ID is `max(existing) + 1`, or 1 for an
    /// empty roster.
    pub fn add(&self, name: &str) -> AppResult<Student> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty.".into()));
        }

        if self.find_by_name(name)? {
            return Err(AppError::Duplicate(name.to_string()));
        }

        let next_id = match self.list()?.iter().map(|s| s.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::Validation(format!("No student ID left after {max}."))
            })?,
        };
        let student = Student::new(next_id, name);

        table::append_row(&self.path, &student)?;
        Ok(student)
    }

    /// Remove a student row and rewrite the roster. Attendance records are
    /// not touched here; see `DeleteLogic` for the cascade.
    pub fn delete(&self, id: u32) -> AppResult<Student> {
        let mut students = self.list()?;
        let pos = students
            .iter()
            .position(|s| s.id == id)
            .ok_or(AppError::NotFound(id))?;

        let removed = students.remove(pos);
        table::write_rows(&self.path, &ROSTER_HEADER, &students)?;
        Ok(removed)
    }
}
