pub mod attendance;
pub mod meal;
pub mod student;
pub mod summary;

pub use attendance::AttendanceRecord;
pub use meal::Meal;
pub use student::Student;
pub use summary::{MealStats, SummaryRow};
