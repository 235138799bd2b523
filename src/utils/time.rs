//! Time utilities: marking timestamps.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Local wall-clock time, used when no explicit timestamp is given.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse `YYYY-MM-DDTHH:MM:SS` (a space is accepted instead of `T`, and
/// seconds may be omitted).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let t = parse_timestamp(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn accepts_iso_and_space_separated() {
        let a = parse_timestamp("2024-01-01T08:00:00").unwrap();
        let b = parse_timestamp("2024-01-01 08:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour(), 8);
        assert!(parse_timestamp("08:00").is_none());
    }

    #[test]
    fn optional_timestamp_reports_bad_input() {
        assert!(parse_optional_timestamp(None).unwrap().is_none());
        let bad = "yesterday".to_string();
        assert!(matches!(
            parse_optional_timestamp(Some(&bad)),
            Err(AppError::InvalidTime(_))
        ));
    }
}
