//! Pure date normalization and day-delta computation.
//!
//! Everything in the ledger works on calendar days, not instants: inputs are
//! `YYYY-MM-DD` strings and unparseable input is answered with `None`, never
//! an error. Callers treat a `None` date as "no constraint" or "zero
//! contribution", which is what lets every downstream computation stay
//! total.

use chrono::{Local, NaiveDate};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `value` as a calendar day, ignoring any time-of-day component.
///
/// Returns the day itself (local midnight at day granularity) or `None` for
/// empty or unparseable input. A datetime string such as
/// `"2025-01-02T09:30:00"` normalizes to `2025-01-02`.
#[must_use]
pub fn normalize_to_day_start(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Some(date);
    }

    // Strip a time-of-day suffix and retry on the leading day component.
    if let Some(day_part) = trimmed.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(day_part, ISO_DATE_FORMAT) {
            return Some(date);
        }
    }

    None
}

/// Signed day delta `b - a`.
///
/// At day granularity the delta is always whole, so callers may floor it
/// without changing the value; it is returned as `f64` because the accrual
/// formula is fractional arithmetic from here on.
#[must_use]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> f64 {
    (b - a).num_days() as f64
}

/// Current local date as a `YYYY-MM-DD` string.
#[must_use]
pub fn today() -> String {
    Local::now().date_naive().format(ISO_DATE_FORMAT).to_string()
}
