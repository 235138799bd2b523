use crate::errors::AppResult;
use crate::models::Student;
use crate::store::Stores;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(stores: &Stores, name: &str) -> AppResult<Student> {
        let student = stores.roster.add(name)?;

        stores.ttlog(
            "add",
            &student.id.to_string(),
            &format!("Student '{}' added", student.name),
        );

        Ok(student)
    }
}
