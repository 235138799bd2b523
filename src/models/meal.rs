use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal served by the mess. Stored on disk as `Breakfast` / `Lunch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meal {
    Breakfast,
    Lunch,
}

impl Meal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
        }
    }

    /// Helper: convert input code from CLI (`breakfast`, `Lunch`, `b`, `L`, ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "b" | "breakfast" => Some(Meal::Breakfast),
            "l" | "lunch" => Some(Meal::Lunch),
            _ => None,
        }
    }

    pub fn is_breakfast(&self) -> bool {
        matches!(self, Meal::Breakfast)
    }

    pub fn is_lunch(&self) -> bool {
        matches!(self, Meal::Lunch)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
