//! Injection schedule generation
//!
//! Fixed-stride date sequences over a cycle, plus the small date helpers the
//! schedule views use.

use chrono::{Duration, NaiveDate};

use crate::error::{CalcError, CalcResult};

/// ISO date format accepted for schedule start dates
const DATE_FMT: &str = "%Y-%m-%d";

/// Generate injection dates starting at `start`, every `stride_days`, while
/// elapsed days stay within `total_weeks` (boundary day inclusive).
///
/// A non-positive stride would never terminate and is rejected up front.
pub fn generate_schedule(
    start: NaiveDate,
    stride_days: i64,
    total_weeks: u32,
) -> CalcResult<Vec<NaiveDate>> {
    if stride_days <= 0 {
        return Err(CalcError::InvalidStride(stride_days));
    }

    let total_days = i64::from(total_weeks) * 7;
    let mut dates = Vec::new();
    let mut offset = 0;
    while offset <= total_days {
        dates.push(start + Duration::days(offset));
        offset += stride_days;
    }

    Ok(dates)
}

/// Generate a schedule from an ISO `YYYY-MM-DD` start date string.
pub fn generate_schedule_from_str(
    start: &str,
    stride_days: i64,
    total_weeks: u32,
) -> CalcResult<Vec<NaiveDate>> {
    let start = NaiveDate::parse_from_str(start, DATE_FMT)?;
    generate_schedule(start, stride_days, total_weeks)
}

/// Whole days between two dates, ignoring order
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Format a date for display, e.g. "Mon, Jan 1"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_week_stride_three() {
        // Stops at day 7, the one-week boundary, inclusive
        let dates = generate_schedule(date(2024, 1, 1), 3, 1).unwrap();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 4), date(2024, 1, 7)]
        );
    }

    #[test]
    fn test_boundary_day_included() {
        let dates = generate_schedule(date(2024, 1, 1), 7, 2).unwrap();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn test_zero_weeks_is_just_the_start() {
        let dates = generate_schedule(date(2024, 1, 1), 3, 0).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1)]);
    }

    #[test]
    fn test_crosses_month_boundary() {
        let dates = generate_schedule(date(2024, 1, 29), 4, 1).unwrap();
        assert_eq!(
            dates,
            vec![date(2024, 1, 29), date(2024, 2, 2)]
        );
    }

    #[test]
    fn test_non_positive_stride_rejected() {
        assert!(matches!(
            generate_schedule(date(2024, 1, 1), 0, 4),
            Err(CalcError::InvalidStride(0))
        ));
        assert!(matches!(
            generate_schedule(date(2024, 1, 1), -2, 4),
            Err(CalcError::InvalidStride(-2))
        ));
    }

    #[test]
    fn test_from_str() {
        let dates = generate_schedule_from_str("2024-01-01", 3, 1).unwrap();
        assert_eq!(dates.len(), 3);

        assert!(matches!(
            generate_schedule_from_str("01/01/2024", 3, 1),
            Err(CalcError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 8)), 7);
        assert_eq!(days_between(date(2024, 1, 8), date(2024, 1, 1)), 7);
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 1)), "Mon, Jan 1");
        assert_eq!(format_date(date(2024, 12, 25)), "Wed, Dec 25");
    }
}
