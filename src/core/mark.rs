use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Meal};
use crate::store::Stores;
use chrono::NaiveDateTime;

pub struct MarkLogic;

impl MarkLogic {
    /// Mark `id` present for `meal` at `at`.
    ///
    /// The student must exist in the roster; its current name is copied into
    /// the record.
    pub fn apply(
        stores: &Stores,
        id: u32,
        meal: Meal,
        at: NaiveDateTime,
    ) -> AppResult<AttendanceRecord> {
        let student = stores
            .roster
            .find_by_id(id)?
            .ok_or(AppError::NotFound(id))?;

        let record = stores.attendance.mark(student.id, &student.name, meal, at)?;

        stores.ttlog(
            "mark",
            &student.id.to_string(),
            &format!(
                "{} marked for {} on {} {}",
                student.name,
                meal,
                record.date_str(),
                record.time_str()
            ),
        );

        Ok(record)
    }
}
