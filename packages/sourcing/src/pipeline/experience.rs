//! Total professional tenure from employment intervals.

use chrono::{DateTime, Datelike, Utc};

use crate::types::RawEmployment;

/// Total years of experience across all entries, rounded to one decimal.
///
/// Elapsed months are summed across every entry without de-overlapping
/// concurrent roles: two simultaneous part-time roles both count in full.
/// That is a deliberate compatibility-preserving simplification, not a bug.
///
/// Degradation rules for malformed entries: no start year → contributes 0;
/// missing start month → January; missing end month on a dated entry →
/// December; no end date and not current → contributes 0; end before
/// start → clamped to 0 months.
///
/// A profile with no employment entries yields exactly 0.
pub fn total_years(entries: &[RawEmployment]) -> f64 {
    total_years_at(entries, Utc::now())
}

/// Same as [`total_years`] with an explicit "now" for ongoing roles.
pub fn total_years_at(entries: &[RawEmployment], now: DateTime<Utc>) -> f64 {
    let months: i64 = entries
        .iter()
        .filter_map(|entry| elapsed_months(entry, now))
        .sum();

    round_to_tenth(months as f64 / 12.0)
}

fn elapsed_months(entry: &RawEmployment, now: DateTime<Utc>) -> Option<i64> {
    let start_year = i64::from(entry.start_year?);
    let start_month = i64::from(entry.start_month.unwrap_or(1));

    let (end_year, end_month) = if entry.is_current {
        (i64::from(now.year()), i64::from(now.month()))
    } else {
        let year = i64::from(entry.end_year?);
        let month = i64::from(entry.end_month.unwrap_or(12));
        (year, month)
    };

    let span = (end_year - start_year) * 12 + (end_month - start_month);
    Some(span.max(0))
}

fn round_to_tenth(years: f64) -> f64 {
    (years * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn role(start: (i32, u32), end: (i32, u32)) -> RawEmployment {
        RawEmployment {
            start_year: Some(start.0),
            start_month: Some(start.1),
            end_year: Some(end.0),
            end_month: Some(end.1),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_two_one_year_roles_sum_to_two() {
        let entries = [role((2018, 1), (2019, 1)), role((2020, 6), (2021, 6))];
        assert_eq!(total_years_at(&entries, now()), 2.0);
    }

    #[test]
    fn test_current_role_measured_against_now() {
        // Started exactly 18 months before "now".
        let entry = RawEmployment {
            start_year: Some(2025),
            start_month: Some(2),
            is_current: true,
            ..Default::default()
        };
        assert_eq!(total_years_at(&[entry], now()), 1.5);
    }

    #[test]
    fn test_no_entries_is_exactly_zero() {
        assert_eq!(total_years_at(&[], now()), 0.0);
    }

    #[test]
    fn test_overlapping_roles_both_count() {
        let entries = [role((2020, 1), (2021, 1)), role((2020, 1), (2021, 1))];
        assert_eq!(total_years_at(&entries, now()), 2.0);
    }

    #[test]
    fn test_missing_start_month_defaults_to_january() {
        let entry = RawEmployment {
            start_year: Some(2020),
            end_year: Some(2020),
            end_month: Some(7),
            ..Default::default()
        };
        assert_eq!(total_years_at(&[entry], now()), 0.5);
    }

    #[test]
    fn test_dateless_and_inverted_entries_degrade_to_zero() {
        let no_start = RawEmployment {
            end_year: Some(2021),
            ..Default::default()
        };
        let no_end = RawEmployment {
            start_year: Some(2020),
            ..Default::default()
        };
        let inverted = role((2021, 6), (2020, 6));
        assert_eq!(total_years_at(&[no_start, no_end, inverted], now()), 0.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 7 months = 0.58333... years
        let entry = role((2020, 1), (2020, 8));
        assert_eq!(total_years_at(&[entry], now()), 0.6);
    }
}
