use super::meal::Meal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One row of the attendance file (`ID,Name,Meal,Date,Time`).
///
/// `name` is a snapshot taken when the record was marked; it is never
/// re-derived from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Meal")]
    pub meal: Meal,
    #[serde(rename = "Date")]
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(rename = "Time")]
    pub time: NaiveTime, // "HH:MM:SS"
}

impl AttendanceRecord {
    /// Build a record from a marking timestamp. Sub-second precision is
    /// dropped so the time column is always `HH:MM:SS`.
    pub fn new(id: u32, name: impl Into<String>, meal: Meal, timestamp: NaiveDateTime) -> Self {
        let time = timestamp
            .time()
            .with_nanosecond(0)
            .unwrap_or_else(|| timestamp.time());

        Self {
            id,
            name: name.into(),
            meal,
            date: timestamp.date(),
            time,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_splits_timestamp_and_drops_fraction() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(8, 5, 9, 750)
            .unwrap();
        let rec = AttendanceRecord::new(3, "Alice", Meal::Breakfast, ts);

        assert_eq!(rec.date_str(), "2024-01-01");
        assert_eq!(rec.time_str(), "08:05:09");
        assert_eq!(rec.time.nanosecond(), 0);
    }
}
