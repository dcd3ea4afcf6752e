//! Persisted data model for the PTO ledger.
//!
//! These structs mirror the JSON schema written through the persistence
//! boundary, so field renames here are wire-format changes.

use serde::{Deserialize, Serialize};

/// A single recorded usage of leave hours on one calendar day.
///
/// Entries are immutable once created. Identity for dedup/suppression is the
/// (date, hours) pair — there is no unique id, so two entries with the same
/// date and hours are indistinguishable to the rest of the system.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Entry {
    /// Calendar day the leave was taken, `YYYY-MM-DD`
    pub date: String,
    /// Hours of leave used on that day (non-negative)
    pub hours: f64,
}

impl Entry {
    pub fn new(date: impl Into<String>, hours: f64) -> Self {
        Self {
            date: date.into(),
            hours,
        }
    }

    /// Derived equality key used across entries, the default catalog, and
    /// the suppression list. `f64`'s `Display` keeps whole hours compact,
    /// so `8.0` keys as `"2025-12-25|8"` and `7.5` as `"2025-12-25|7.5"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}|{}", self.date, self.hours)
    }
}

/// The full persisted record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Accrual start date, `YYYY-MM-DD`; replaced by the configured default
    /// when absent or invalid
    pub start_date: String,
    /// Usage entries in stored (insertion) order
    pub entries: Vec<Entry>,
    /// Keys of catalog entries the user deleted; these must never be
    /// re-merged by reconciliation
    pub suppressed_defaults: Vec<String>,
}

impl State {
    /// The state substituted whenever nothing valid is persisted.
    #[must_use]
    pub fn with_start_date(start_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            entries: Vec::new(),
            suppressed_defaults: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_formats_whole_hours_without_fraction() {
        let entry = Entry::new("2025-12-25", 8.0);
        assert_eq!(entry.key(), "2025-12-25|8");
    }

    #[test]
    fn test_entry_key_keeps_fractional_hours() {
        let entry = Entry::new("2025-03-14", 7.5);
        assert_eq!(entry.key(), "2025-03-14|7.5");
    }

    #[test]
    fn test_state_serializes_with_camel_case_fields() {
        let state = State {
            start_date: "2025-01-01".to_string(),
            entries: vec![Entry::new("2025-02-03", 4.0)],
            suppressed_defaults: vec!["2025-12-25|8".to_string()],
        };

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"suppressedDefaults\""));
        assert!(json.contains("\"entries\""));

        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_with_start_date_is_empty() {
        let state = State::with_start_date("2025-01-01");
        assert_eq!(state.start_date, "2025-01-01");
        assert!(state.entries.is_empty());
        assert!(state.suppressed_defaults.is_empty());
    }
}
