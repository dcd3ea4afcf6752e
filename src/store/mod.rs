//! State persistence layer: the key-value boundary and the state store
//! built on top of it.

/// Key-value persistence boundary and its backends
pub mod persistence;

/// Load/normalize/persist of the versioned state record
pub mod state_store;

pub use persistence::{FileStore, MemoryStore, Persistence};
pub use state_store::{STATE_KEY, StateStore};
