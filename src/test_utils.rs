//! Shared test utilities for `PtoBuddy`.
//!
//! Helpers for building a state store over an in-memory backend and for
//! creating entries and configs with sensible defaults.

use crate::config::AppConfig;
use crate::models::Entry;
use crate::store::{MemoryStore, StateStore};
use tracing_subscriber::EnvFilter;

/// Initializes test tracing once; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A usage entry with the given date and hours.
#[must_use]
pub fn sample_entry(date: &str, hours: f64) -> Entry {
    Entry::new(date, hours)
}

/// The two-entry catalog used across store tests: Independence Day and
/// Christmas, one working day each.
#[must_use]
pub fn test_catalog() -> Vec<Entry> {
    vec![
        sample_entry("2025-07-04", 8.0),
        sample_entry("2025-12-25", 8.0),
    ]
}

/// Config with a 2025-01-01 start, 8-hour days, and the test catalog.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig {
        start_date: "2025-01-01".to_string(),
        hours_per_day: 8.0,
        defaults: test_catalog(),
    }
}

/// The standard setup for store tests: an empty in-memory backend and the
/// test config.
#[must_use]
pub fn setup_test_store() -> StateStore<MemoryStore> {
    StateStore::new(MemoryStore::new(), test_config())
}
