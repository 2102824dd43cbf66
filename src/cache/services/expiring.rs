//! Timestamped envelopes with time-to-live expiry.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use crate::cache::ports::{KeyValueStore, StoreError};

/// Serialised shape of every cached value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    /// Cached payload.
    pub data: T,
    /// Write time in epoch milliseconds.
    pub timestamp: i64,
}

/// Errors returned while writing cache entries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// The store refused the write.
    #[error("failed to persist cache entry: {0}")]
    Persistence(#[from] StoreError),

    /// The value could not be serialised.
    #[error("failed to encode cache entry: {0}")]
    Encode(String),
}

/// Cache that discards entries older than a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct ExpiringCache<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    store: S,
    clock: Arc<C>,
    ttl: Duration,
}

impl<S, C> ExpiringCache<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates a cache over `store` whose entries live for `ttl`.
    #[must_use]
    pub const fn new(store: S, clock: Arc<C>, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    /// Returns the current time according to the cache clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Writes `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Encode`] when `value` cannot be serialised and
    /// [`CacheError::Persistence`] when the store rejects the write.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let envelope = CacheEnvelope {
            data: value,
            timestamp: self.now().timestamp_millis(),
        };
        let encoded =
            serde_json::to_string(&envelope).map_err(|err| CacheError::Encode(err.to_string()))?;
        self.store.set(key, encoded)?;
        Ok(())
    }

    /// Reads the value under `key`.
    ///
    /// Returns `None` when the entry is missing, cannot be decoded, or is
    /// older than the time-to-live. Expired entries are removed from the
    /// store; undecodable entries are left in place.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        let envelope: CacheEnvelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                debug!(key, error = %err, "ignoring undecodable cache entry");
                return None;
            }
        };

        let age = self
            .now()
            .timestamp_millis()
            .saturating_sub(envelope.timestamp);
        if age > self.ttl_millis() {
            debug!(key, age_ms = age, "evicting expired cache entry");
            self.store.remove(key);
            return None;
        }

        Some(envelope.data)
    }

    fn ttl_millis(&self) -> i64 {
        i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX)
    }
}
