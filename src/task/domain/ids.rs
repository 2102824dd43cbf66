//! Task identifiers and their generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, never reused identifier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic identifier source.
///
/// Identifiers track the creation time in epoch milliseconds, so they stay
/// comparable with ids written by older snapshots, but each one is strictly
/// greater than the last even when several tasks are created within the same
/// millisecond.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator that never returns an id at or below any of
    /// `existing`.
    #[must_use]
    pub fn seeded(existing: impl IntoIterator<Item = TaskId>) -> Self {
        let next = existing
            .into_iter()
            .map(TaskId::value)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        Self { next }
    }

    /// Returns a fresh identifier for a task created at `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = self.next.max(millis);
        self.next = id.saturating_add(1);
        TaskId(id)
    }
}
