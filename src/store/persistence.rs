//! The key-value persistence boundary.
//!
//! The ledger persists one JSON string under one fixed key, with an expiry.
//! That contract is small enough to express as a trait, so the state store
//! can be backed by anything — an in-memory map in tests, a file on disk in
//! an embedding application. Writes are advisory: a backend that cannot
//! write degrades to returning nothing on the next read, and the store
//! self-heals from that.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::errors::Result;

/// A key-value store with per-value expiry.
pub trait Persistence {
    /// Returns the stored value, or `None` if the key is absent or expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` for `ttl`. Best-effort: implementations
    /// log failures instead of surfacing them.
    fn set(&mut self, key: &str, value: &str, ttl: Duration);
}

/// A stored value together with its expiry instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredValue {
    value: String,
    expires_at: DateTime<Utc>,
}

impl StoredValue {
    fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// In-memory backend, used by tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, StoredValue>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .filter(|stored| !stored.is_expired())
            .map(|stored| stored.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) {
        self.values.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: Utc::now() + ttl,
            },
        );
    }
}

/// File-backed backend: a single JSON file mapping key to value + expiry,
/// playing the role the browser cookie jar plays for the original tracker.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the on-disk map; a missing or unreadable file reads as empty.
    fn read_map(&self) -> HashMap<String, StoredValue> {
        match self.try_read_map() {
            Ok(map) => map,
            Err(e) => {
                debug!("Treating store file {:?} as empty: {}", self.path, e);
                HashMap::new()
            }
        }
    }

    fn try_read_map(&self) -> Result<HashMap<String, StoredValue>> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map(&self, map: &HashMap<String, StoredValue>) -> Result<()> {
        let contents = serde_json::to_string(map)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Persistence for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .filter(|stored| !stored.is_expired())
            .map(|stored| stored.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) {
        let mut map = self.read_map();
        map.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: Utc::now() + ttl,
            },
        );

        if let Err(e) = self.write_map(&map) {
            warn!("Failed to persist {:?} (continuing without): {}", self.path, e);
        }
    }
}
