//! Persisted sidebar state for hmdocs.
//!
//! Folder expand/collapse state lives in a key-value store that is injected
//! into the sidebar renderer instead of being reached through global state.
//! The store trait is deliberately infallible: persistence is a convenience,
//! and a store that cannot read or write behaves as if nothing was saved.
//!
//! # Implementations
//!
//! - [`NullStore`]: no persistence at all (every folder starts expanded)
//! - [`MemoryStore`]: in-process map, used by tests and one-shot renders
//! - [`FileStore`]: a single JSON object file on disk
//!
//! # Example
//!
//! ```
//! use hmdocs_state::{ExpandState, MemoryStore};
//!
//! let store = MemoryStore::new();
//! assert!(ExpandState::load(&store, "guides").is_expanded());
//!
//! let state = ExpandState::toggle(&store, "guides");
//! assert!(!state.is_expanded());
//! assert_eq!(store.snapshot().get("sidebar-guides").map(String::as_str), Some("false"));
//! ```

mod expand;
mod file;
mod memory;

pub use expand::{ExpandState, state_key};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key-value store for persisted UI state.
///
/// Values are opaque strings. Implementations swallow their own failures:
/// a failed `get` is a miss and a failed `set` is dropped.
pub trait StateStore: Send + Sync {
    /// Retrieve the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// No-op [`StateStore`] for contexts without persistent storage.
///
/// Every `get` misses; every `set` is silently discarded.
pub struct NullStore;

impl StateStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}
