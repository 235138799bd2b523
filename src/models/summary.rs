use super::attendance::AttendanceRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-student meal counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealStats {
    pub total: usize,
    pub breakfast: usize,
    pub lunch: usize,
}

impl MealStats {
    pub fn record(&mut self, rec: &AttendanceRecord) {
        self.total += 1;
        if rec.meal.is_breakfast() {
            self.breakfast += 1;
        } else if rec.meal.is_lunch() {
            self.lunch += 1;
        }
    }

    /// Count the records belonging to `id`.
    pub fn for_student<'a, I>(id: u32, records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut stats = Self::default();
        for rec in records.into_iter().filter(|r| r.id == id) {
            stats.record(rec);
        }
        stats
    }
}

/// One line of the daily summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub stats: MealStats,
}

impl SummaryRow {
    /// Group records by student ID.
    ///
    /// The name comes from the first record seen for each ID; rows are
    /// returned by ascending ID.
    pub fn group<'a, I>(records: I) -> Vec<SummaryRow>
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut groups: BTreeMap<u32, SummaryRow> = BTreeMap::new();

        for rec in records {
            groups
                .entry(rec.id)
                .or_insert_with(|| SummaryRow {
                    id: rec.id,
                    name: rec.name.clone(),
                    stats: MealStats::default(),
                })
                .stats
                .record(rec);
        }

        groups.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meal::Meal;
    use chrono::NaiveDate;

    fn rec(id: u32, name: &str, meal: Meal, h: u32) -> AttendanceRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        AttendanceRecord::new(id, name, meal, ts)
    }

    #[test]
    fn stats_only_count_matching_id() {
        let records = vec![
            rec(1, "Alice", Meal::Breakfast, 8),
            rec(2, "Bob", Meal::Lunch, 12),
            rec(1, "Alice", Meal::Lunch, 13),
        ];

        let stats = MealStats::for_student(1, &records);
        assert_eq!(
            stats,
            MealStats {
                total: 2,
                breakfast: 1,
                lunch: 1
            }
        );
        assert_eq!(MealStats::for_student(9, &records), MealStats::default());
    }

    #[test]
    fn group_orders_by_id_and_keeps_first_name() {
        let records = vec![
            rec(7, "Zoe", Meal::Lunch, 12),
            rec(2, "Bob", Meal::Breakfast, 8),
            rec(7, "Zoe Renamed", Meal::Breakfast, 9),
        ];

        let rows = SummaryRow::group(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].id, 7);
        assert_eq!(rows[1].name, "Zoe");
        assert_eq!(rows[1].stats.total, 2);
        assert_eq!(rows[1].stats.breakfast, 1);
        assert_eq!(rows[1].stats.lunch, 1);
    }
}
