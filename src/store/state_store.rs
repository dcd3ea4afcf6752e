//! Load, normalize, and persist the ledger state.
//!
//! Everything the UI layer touches goes through [`StateStore`]: `ensure` is
//! the single idempotent entry point for reads, and each mutation follows
//! the same read-merge-write shape — build the new entry list, persist it,
//! then re-load so the returned value is the reconciled canonical state.
//!
//! Persistence is advisory. Parse failures and write failures are logged
//! and self-healed by substituting the configured default state; no error
//! in this module reaches the caller.

use chrono::Duration;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::core::{ledger, reconcile};
use crate::datemath::normalize_to_day_start;
use crate::errors::{Error, Result};
use crate::models::{Entry, State};
use crate::store::persistence::Persistence;

/// Fixed key the state record is stored under.
pub const STATE_KEY: &str = "ptoTrackerState";

/// Stored-value lifetime, matching the original tracker's year-long cookie.
const STATE_TTL_DAYS: i64 = 365;

/// The state store: one persistence backend plus the application config
/// that supplies the default start date, accrual rate, and entry catalog.
#[derive(Debug)]
pub struct StateStore<P: Persistence> {
    persistence: P,
    config: AppConfig,
}

impl<P: Persistence> StateStore<P> {
    #[must_use]
    pub fn new(persistence: P, config: AppConfig) -> Self {
        Self {
            persistence,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Direct access to the backend, for embedders and tests that need to
    /// inspect or pre-seed raw stored values.
    pub fn persistence_mut(&mut self) -> &mut P {
        &mut self.persistence
    }

    /// Loads, reconciles, persists, and returns the canonical state.
    ///
    /// Every read path calls this. It is a fixed point: calling it again
    /// with no intervening writes returns the same state, because the merge
    /// adds a catalog entry only when its key is not already present.
    pub fn ensure(&mut self) -> State {
        let mut state = self.load();
        state.entries = reconcile::merge(
            &state.entries,
            &self.config.defaults,
            &state.suppressed_defaults,
        );
        self.save(&state);
        state
    }

    /// Reads and normalizes the raw persisted value.
    ///
    /// Missing or malformed data is not an error here: the configured
    /// default state is substituted and best-effort re-persisted, and the
    /// failure is only logged. The fallible parse itself lives in
    /// [`Self::parse_raw`] so the fallback policy stays testable.
    pub fn load(&mut self) -> State {
        let Some(raw) = self.persistence.get(STATE_KEY) else {
            info!("No persisted state under {STATE_KEY}, starting fresh");
            return self.fall_back_to_default();
        };

        match self.parse_raw(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("Discarding malformed persisted state: {e}");
                self.fall_back_to_default()
            }
        }
    }

    /// Serializes and writes `state` with a year-long expiry. Best-effort:
    /// a failed write is logged and ignored, and the next read self-heals.
    pub fn save(&mut self, state: &State) {
        match serde_json::to_string(state) {
            Ok(json) => {
                debug!("Persisting state: {} entries", state.entries.len());
                self.persistence
                    .set(STATE_KEY, &json, Duration::days(STATE_TTL_DAYS));
            }
            Err(e) => warn!("Failed to serialize state (skipping write): {e}"),
        }
    }

    /// Hours accrued from the state's start date up to `date`, at the
    /// configured rate.
    #[must_use]
    pub fn calculate_accrued_hours(&self, date: &str, state: &State) -> f64 {
        ledger::accrued_hours(date, &state.start_date, self.config.hours_per_day)
    }

    /// Hours used by entries dated on or before `date`.
    #[must_use]
    pub fn calculate_used_hours(&self, date: &str, state: &State) -> f64 {
        ledger::used_hours(date, &state.entries)
    }

    /// Appends a usage entry and persists, returning the re-reconciled
    /// canonical state.
    pub fn add_entry(&mut self, mut state: State, date: &str, hours: f64) -> State {
        info!("Adding entry {date} / {hours}h");
        state.entries.push(Entry::new(date, hours));
        self.save(&state);
        self.ensure()
    }

    /// Removes the entry at `index` (position in stored order) and
    /// persists. Deleting a catalog-sourced entry also records its key in
    /// the suppression list so reconciliation does not re-add it. An
    /// out-of-range index is a logged no-op.
    pub fn delete_entry(&mut self, mut state: State, index: usize) -> State {
        if index < state.entries.len() {
            let removed = state.entries.remove(index);
            info!("Deleting entry {} / {}h", removed.date, removed.hours);
            state.suppressed_defaults = reconcile::suppress(
                &removed,
                &state.suppressed_defaults,
                &self.config.defaults,
            );
        } else {
            debug!(
                "Ignoring delete of index {index} (only {} entries)",
                state.entries.len()
            );
        }
        self.save(&state);
        self.ensure()
    }

    /// Empties the entry list and persists. Suppressions survive the clear,
    /// so the returned state contains exactly the non-suppressed catalog
    /// entries (re-merged by `ensure`).
    pub fn clear_entries(&mut self, mut state: State) -> State {
        info!("Clearing {} entries", state.entries.len());
        state.entries.clear();
        self.save(&state);
        self.ensure()
    }

    fn fall_back_to_default(&mut self) -> State {
        let state = self.default_state();
        self.save(&state);
        state
    }

    fn default_state(&self) -> State {
        State::with_start_date(&self.config.start_date)
    }

    /// Parses a raw persisted value into a normalized [`State`].
    ///
    /// # Errors
    /// Returns `Error::StateParse` when the value is not JSON and
    /// `Error::StateShape` when it is JSON but not an object. Field-level
    /// damage is repaired instead: an invalid start date falls back to the
    /// configured default, non-array fields coerce to empty, and malformed
    /// entry items are dropped.
    fn parse_raw(&self, raw: &str) -> Result<State> {
        let value: Value = serde_json::from_str(raw)?;
        let Some(object) = value.as_object() else {
            return Err(Error::StateShape {
                message: format!("expected a JSON object, got {value}"),
            });
        };

        let start_date = object
            .get("startDate")
            .and_then(Value::as_str)
            .filter(|s| normalize_to_day_start(s).is_some())
            .unwrap_or(&self.config.start_date)
            .to_string();

        let entries = object
            .get("entries")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(entry_from_value).collect())
            .unwrap_or_default();

        let suppressed_defaults = object
            .get("suppressedDefaults")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(State {
            start_date,
            entries,
            suppressed_defaults,
        })
    }
}

/// Reads one entry out of a persisted JSON item, dropping anything without
/// a string date and a non-negative finite hour count.
fn entry_from_value(value: &Value) -> Option<Entry> {
    let date = value.get("date")?.as_str()?;
    let hours = value.get("hours")?.as_f64()?;
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    Some(Entry::new(date, hours))
}
