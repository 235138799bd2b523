use crate::errors::{AppError, AppResult};
use crate::models::{MealStats, Student};
use crate::store::Stores;

pub struct SearchLogic;

impl SearchLogic {
    /// Resolve a student and their lifetime meal counters.
    pub fn lookup(stores: &Stores, id: u32) -> AppResult<(Student, MealStats)> {
        let student = stores
            .roster
            .find_by_id(id)?
            .ok_or(AppError::NotFound(id))?;
        let stats = stores.attendance.stats_for(id)?;
        Ok((student, stats))
    }
}
