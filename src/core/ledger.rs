//! Accrual and usage business logic.
//!
//! All functions here are pure and total: bad dates contribute zero rather
//! than erroring, mirroring the null-sentinel contract of
//! [`crate::datemath`]. State and parameters come in as explicit arguments
//! so the math is independently testable.

use crate::datemath::{days_between, normalize_to_day_start};
use crate::models::Entry;

/// Leave days accrued per year of elapsed time.
pub const ACCRUAL_DAYS_PER_YEAR: f64 = 20.0;

const DAYS_PER_YEAR: f64 = 365.0;

/// Hours of leave accrued between `start_date` and `target_date` at a rate
/// of [`ACCRUAL_DAYS_PER_YEAR`] days per 365-day year.
///
/// Uses the exclusive day delta (`target - start`), so the accrual on the
/// start date itself is 0. The inclusive variant (`floor(delta) + 1`) seen
/// in one historical rendition of this formula shifts every value by
/// exactly one day's accrual and is deliberately not implemented.
///
/// Returns 0 (never negative, never an error) when either date fails to
/// normalize or the target precedes the start.
#[must_use]
pub fn accrued_hours(target_date: &str, start_date: &str, hours_per_day: f64) -> f64 {
    let (Some(start), Some(target)) = (
        normalize_to_day_start(start_date),
        normalize_to_day_start(target_date),
    ) else {
        return 0.0;
    };

    if target < start {
        return 0.0;
    }

    let elapsed_days = days_between(start, target);
    elapsed_days * (ACCRUAL_DAYS_PER_YEAR * hours_per_day / DAYS_PER_YEAR)
}

/// Sum of hours over all entries dated on or before `target_date`.
///
/// Entries with unparseable dates are excluded; an unparseable target sums
/// to 0.
#[must_use]
pub fn used_hours(target_date: &str, entries: &[Entry]) -> f64 {
    let Some(target) = normalize_to_day_start(target_date) else {
        return 0.0;
    };

    entries
        .iter()
        .filter(|entry| {
            normalize_to_day_start(&entry.date).is_some_and(|date| date <= target)
        })
        .map(|entry| entry.hours)
        .sum()
}

/// Available balance, clamped at zero — using more than was accrued never
/// reports a negative balance.
#[must_use]
pub fn available_hours(accrued: f64, used: f64) -> f64 {
    (accrued - used).max(0.0)
}

/// Available balance expressed in working days.
///
/// A zero `hours_per_day` yields 0 rather than infinity.
#[must_use]
pub fn available_days(available_hours: f64, hours_per_day: f64) -> f64 {
    if hours_per_day == 0.0 {
        return 0.0;
    }

    available_hours / hours_per_day
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::sample_entry;

    #[test]
    fn test_accrued_hours_ten_elapsed_days() {
        // 10 elapsed days at 8h/day: 10 * (20 * 8 / 365) ≈ 4.38
        let accrued = accrued_hours("2025-01-11", "2025-01-01", 8.0);
        assert!((accrued - 10.0 * (20.0 * 8.0 / 365.0)).abs() < 1e-9);
        assert!((accrued - 4.383_561_643_835_616).abs() < 1e-9);
    }

    #[test]
    fn test_accrued_hours_zero_on_start_date() {
        // Exclusive day delta: no accrual has elapsed on the start date.
        assert_eq!(accrued_hours("2025-01-01", "2025-01-01", 8.0), 0.0);
    }

    #[test]
    fn test_accrued_hours_zero_before_start() {
        assert_eq!(accrued_hours("2024-12-31", "2025-01-01", 8.0), 0.0);
    }

    #[test]
    fn test_accrued_hours_zero_on_bad_dates() {
        assert_eq!(accrued_hours("garbage", "2025-01-01", 8.0), 0.0);
        assert_eq!(accrued_hours("2025-01-11", "garbage", 8.0), 0.0);
        assert_eq!(accrued_hours("", "", 8.0), 0.0);
    }

    #[test]
    fn test_accrued_hours_monotonically_non_decreasing() {
        let mut previous = 0.0;
        for day in 1..=28 {
            let target = format!("2025-02-{day:02}");
            let accrued = accrued_hours(&target, "2025-01-01", 8.0);
            assert!(accrued >= previous, "accrual decreased at {target}");
            previous = accrued;
        }
    }

    #[test]
    fn test_used_hours_sums_entries_up_to_target() {
        let entries = vec![
            sample_entry("2025-01-02", 8.0),
            sample_entry("2025-01-05", 4.0),
            sample_entry("2025-02-01", 8.0),
        ];
        assert_eq!(used_hours("2025-01-31", &entries), 12.0);
        assert_eq!(used_hours("2025-02-01", &entries), 20.0);
    }

    #[test]
    fn test_used_hours_entry_after_target_contributes_zero() {
        let entries = vec![sample_entry("2025-01-05", 8.0)];
        assert_eq!(used_hours("2025-01-01", &entries), 0.0);
    }

    #[test]
    fn test_used_hours_skips_unparseable_entry_dates() {
        let entries = vec![
            sample_entry("not-a-date", 8.0),
            sample_entry("2025-01-02", 4.0),
        ];
        assert_eq!(used_hours("2025-12-31", &entries), 4.0);
    }

    #[test]
    fn test_used_hours_zero_on_bad_target() {
        let entries = vec![sample_entry("2025-01-02", 8.0)];
        assert_eq!(used_hours("garbage", &entries), 0.0);
    }

    #[test]
    fn test_available_hours_clamped_at_zero() {
        assert_eq!(available_hours(10.0, 4.0), 6.0);
        assert_eq!(available_hours(4.0, 10.0), 0.0);
        assert_eq!(available_hours(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_available_days_divides_by_hours_per_day() {
        assert_eq!(available_days(16.0, 8.0), 2.0);
        assert_eq!(available_days(4.0, 8.0), 0.5);
    }

    #[test]
    fn test_available_days_zero_hours_per_day_is_zero() {
        assert_eq!(available_days(16.0, 0.0), 0.0);
    }
}
