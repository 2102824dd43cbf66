//! The task value and its serialised form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskFields, TaskId};

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(with = "schedule_format")]
    schedule: DateTime<Utc>,
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an active task from validated fields.
    #[must_use]
    pub fn new(id: TaskId, fields: TaskFields) -> Self {
        Self {
            id,
            activity: fields.activity,
            description: fields.description,
            schedule: fields.schedule,
            priority: fields.priority,
            completed_date: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the activity label.
    #[must_use]
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the scheduled instant.
    #[must_use]
    pub const fn schedule(&self) -> DateTime<Utc> {
        self.schedule
    }

    /// Returns the priority tier.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns when the task was completed, if it is in the history.
    #[must_use]
    pub const fn completed_date(&self) -> Option<DateTime<Utc>> {
        self.completed_date
    }

    /// Returns `true` when the task carries a completion date.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_date.is_some()
    }

    /// Trims the description and drops it when blank. Returns `true` when
    /// the stored value changed.
    pub(crate) fn normalise_description(&mut self) -> bool {
        let Some(text) = self.description.take() else {
            return false;
        };
        let trimmed = text.trim();
        let changed = trimmed.len() != text.len();
        if trimmed.is_empty() {
            return true;
        }
        self.description = Some(if changed { trimmed.to_owned() } else { text });
        changed
    }

    /// Replaces every editable field, keeping the id.
    pub(crate) fn apply(&mut self, fields: TaskFields) {
        self.activity = fields.activity;
        self.description = fields.description;
        self.schedule = fields.schedule;
        self.priority = fields.priority;
    }

    pub(crate) fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_date = Some(at);
    }

    pub(crate) fn mark_active(&mut self) {
        self.completed_date = None;
    }
}

/// Writes schedules as RFC 3339 and reads any format the task form accepts,
/// so snapshots holding raw `datetime-local` strings still load.
mod schedule_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::task::domain::parse_schedule;

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_schedule(&raw).map_err(D::Error::custom)
    }
}
