//! Key-value storage port backing the expiring cache.

use thiserror::Error;

/// String key-value storage in the shape of browser local storage.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend refuses the write.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Errors raised by storage backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The write would exceed the storage quota.
    #[error("storage quota exceeded: {required} bytes required, {quota} bytes available")]
    QuotaExceeded {
        /// Total bytes the store would hold after the write.
        required: usize,
        /// Maximum bytes the store may hold.
        quota: usize,
    },

    /// The backend could not be accessed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
