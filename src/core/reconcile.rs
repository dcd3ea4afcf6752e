//! Default-entry reconciliation.
//!
//! The default catalog (pre-known leave days such as company holidays) is
//! merged into the user's entry list on every load. A user who deletes a
//! catalog entry expects it to stay gone, so deletions of catalog-sourced
//! entries are remembered in a suppression list that the merge honors.

use std::collections::HashSet;

use crate::models::Entry;

/// Appends to `existing` every catalog entry whose key is in neither the
/// existing key set nor `suppressed`, preserving catalog order.
///
/// Idempotent: a second merge with the same inputs adds nothing, because
/// every surviving catalog key is then already present in `existing`.
#[must_use]
pub fn merge(existing: &[Entry], catalog: &[Entry], suppressed: &[String]) -> Vec<Entry> {
    let mut present: HashSet<String> = existing.iter().map(Entry::key).collect();
    present.extend(suppressed.iter().cloned());

    let mut merged = existing.to_vec();
    for default_entry in catalog {
        let key = default_entry.key();
        if !present.contains(&key) {
            merged.push(default_entry.clone());
            // Guards against duplicate keys within the catalog itself.
            present.insert(key);
        }
    }

    merged
}

/// Records the deletion of a catalog-sourced entry.
///
/// Only catalog keys are suppressible — a deleted user-added entry is simply
/// gone and needs no memory. Returns `suppressed` unchanged when the key is
/// not in the catalog or is already recorded.
#[must_use]
pub fn suppress(deleted_entry: &Entry, suppressed: &[String], catalog: &[Entry]) -> Vec<String> {
    let key = deleted_entry.key();
    let mut updated = suppressed.to_vec();

    let in_catalog = catalog.iter().any(|entry| entry.key() == key);
    if in_catalog && !updated.contains(&key) {
        updated.push(key);
    }

    updated
}
