//! Parsing of operator-entered values.

use crate::errors::{AppError, AppResult};
use crate::models::Meal;

/// Parse a student ID typed by the operator.
pub fn parse_student_id(raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation(format!(
            "ID must be a number (got '{}').",
            raw.trim()
        ))),
    }
}

pub fn parse_meal(raw: &str) -> AppResult<Meal> {
    Meal::from_code(raw).ok_or_else(|| AppError::InvalidMeal(raw.to_string()))
}
