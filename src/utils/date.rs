use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a period into inclusive bounds. `None` means "everything".
///
/// Supported:
/// - all
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - the same formats as `start:end`
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".into(),
            ));
        }

        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;

        if from > to {
            return Err(AppError::InvalidRange(format!("{start} is after {end}")));
        }
        return Ok(Some((from, to)));
    }

    period_bounds(r).map(Some)
}

/// First and last day of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            Ok((d1, last_day_of_month(d1).ok_or_else(invalid)?))
        }
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(
            parse_range("2024").unwrap(),
            Some((ymd(2024, 1, 1), ymd(2024, 12, 31)))
        );
        assert_eq!(
            parse_range("2024-02").unwrap(),
            Some((ymd(2024, 2, 1), ymd(2024, 2, 29)))
        );
        assert_eq!(
            parse_range("2024-01-05").unwrap(),
            Some((ymd(2024, 1, 5), ymd(2024, 1, 5)))
        );
        assert_eq!(parse_range("all").unwrap(), None);
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_range("2023-11:2024-01").unwrap(),
            Some((ymd(2023, 11, 1), ymd(2024, 1, 31)))
        );
        assert!(parse_range("2024:2024-01").is_err());
        assert!(parse_range("2024-03-01:2024-01-01").is_err());
        assert!(parse_range("24-1").is_err());
    }
}
