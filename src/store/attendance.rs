//! Attendance log (`ID,Name,Meal,Date,Time`).

use super::table::{self, LoadStatus};
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, Meal, MealStats, SummaryRow};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

pub const ATTENDANCE_HEADER: [&str; 5] = ["ID", "Name", "Meal", "Date", "Time"];

pub struct AttendanceStore {
    path: PathBuf,
}

impl AttendanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ensure_loadable(&self) -> AppResult<LoadStatus> {
        table::ensure_table::<AttendanceRecord>(&self.path, &ATTENDANCE_HEADER)
    }

    /// Records in file order, optionally limited to an inclusive date range.
    pub fn list(&self, bounds: Option<(NaiveDate, NaiveDate)>) -> AppResult<Vec<AttendanceRecord>> {
        let records: Vec<AttendanceRecord> = table::read_rows(&self.path, &ATTENDANCE_HEADER)?;

        Ok(match bounds {
            Some((from, to)) => records
                .into_iter()
                .filter(|r| r.date >= from && r.date <= to)
                .collect(),
            None => records,
        })
    }

    /// Append a new event. Marking the same student twice for the same meal
    /// produces two records.
    pub fn mark(
        &self,
        id: u32,
        name: &str,
        meal: Meal,
        timestamp: NaiveDateTime,
    ) -> AppResult<AttendanceRecord> {
        let record = AttendanceRecord::new(id, name, meal, timestamp);
        table::append_row(&self.path, &record)?;
        Ok(record)
    }

    pub fn stats_for(&self, id: u32) -> AppResult<MealStats> {
        let records = self.list(None)?;
        Ok(MealStats::for_student(id, &records))
    }

    /// Records of `date` grouped per student, by ascending ID.
    pub fn today_summary(&self, date: NaiveDate) -> AppResult<Vec<SummaryRow>> {
        let records = self.list(Some((date, date)))?;
        Ok(SummaryRow::group(&records))
    }

    /// Drop every record of `id`. Returns how many were removed; zero is
    /// not an error.
    pub fn delete_by_id(&self, id: u32) -> AppResult<usize> {
        let records = self.list(None)?;
        let before = records.len();

        let kept: Vec<AttendanceRecord> = records.into_iter().filter(|r| r.id != id).collect();
        let removed = before - kept.len();

        table::write_rows(&self.path, &ATTENDANCE_HEADER, &kept)?;
        Ok(removed)
    }
}
