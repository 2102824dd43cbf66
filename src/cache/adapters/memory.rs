//! In-memory key-value store with an optional byte quota.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::cache::ports::{KeyValueStore, StoreError};

/// Thread-safe in-memory store.
///
/// Clones share the same entries. When a quota is set, a write that would
/// push the summed key and value lengths past it is rejected, the way
/// browser storage rejects writes once its quota is spent.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store holding at most `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(quota),
        }
    }

    /// Returns `true` when a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .is_ok_and(|entries| entries.contains_key(key))
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// Returns `true` when the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn footprint<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> usize {
    entries.map(|(key, value)| key.len() + value.len()).sum()
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        if let Some(quota) = self.quota {
            let others = footprint(entries.iter().filter(|(existing, _)| *existing != key));
            let required = others + key.len() + value.len();
            if required > quota {
                return Err(StoreError::QuotaExceeded { required, quota });
            }
        }

        entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}
