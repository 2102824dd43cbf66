//! Runtime configuration for the agenda core.
//!
//! Every setting has a default matching the behaviour of the browser build,
//! so an empty JSON object yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Storage key for the active task snapshot.
pub const DEFAULT_ACTIVE_KEY: &str = "todos_cache";

/// Storage key for the completed task snapshot.
pub const DEFAULT_COMPLETED_KEY: &str = "completed_cache";

/// Tunable settings for caching, input limits and transient UI timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AgendaConfig {
    /// Age in milliseconds after which a cache entry is treated as absent.
    pub cache_ttl_ms: u64,
    /// Storage key holding the active collection.
    pub active_key: String,
    /// Storage key holding the completed collection.
    pub completed_key: String,
    /// Maximum description length in characters accepted by the form.
    pub description_limit: usize,
    /// Quiet period in milliseconds before a debounced update fires.
    pub debounce_window_ms: u64,
    /// Milliseconds a notification stays visible.
    pub notification_dismiss_ms: u64,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: 60 * 60 * 1000, // 1 hour
            active_key: DEFAULT_ACTIVE_KEY.to_owned(),
            completed_key: DEFAULT_COMPLETED_KEY.to_owned(),
            description_limit: 500,
            debounce_window_ms: 100,
            notification_dismiss_ms: 3_500,
        }
    }
}

/// Error returned when a configuration document cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid agenda configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

impl AgendaConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Returns the cache time-to-live.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Returns the debounce window for secondary displays.
    #[must_use]
    pub const fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }

    /// Returns how long notifications remain visible.
    #[must_use]
    pub const fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }
}
