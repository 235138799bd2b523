use crate::errors::AppResult;
use crate::models::Student;
use crate::store::Stores;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a student and cascade into the attendance log.
    ///
    /// Returns the removed student and the number of attendance records
    /// dropped with it.
    pub fn apply(stores: &Stores, id: u32) -> AppResult<(Student, usize)> {
        let student = stores.roster.delete(id)?;
        let removed = stores.attendance.delete_by_id(id)?;

        stores.ttlog(
            "del",
            &id.to_string(),
            &format!(
                "Student '{}' deleted with {} attendance record(s)",
                student.name, removed
            ),
        );

        Ok((student, removed))
    }
}
