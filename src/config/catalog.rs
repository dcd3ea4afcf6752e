//! Compiled-in default entry catalog.
//!
//! These are the pre-known leave days every fresh ledger is seeded with.
//! A config file can replace the list wholesale (see [`super::AppConfig`]);
//! with no file present, this constant list is the catalog.

use crate::models::Entry;

/// The builtin catalog: US company holidays for the current tracking year,
/// one working day of leave each.
#[must_use]
pub fn builtin_catalog() -> Vec<Entry> {
    vec![
        Entry::new("2025-01-01", 8.0),
        Entry::new("2025-07-04", 8.0),
        Entry::new("2025-11-27", 8.0),
        Entry::new("2025-11-28", 8.0),
        Entry::new("2025-12-25", 8.0),
        Entry::new("2025-12-26", 8.0),
    ]
}
