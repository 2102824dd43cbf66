//! Filter, sort, and tab selections.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::task::domain::Priority;

/// Error returned when a view option name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseViewOptionError {
    /// Which option was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Top-level view selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// The list of tasks still to do.
    #[default]
    Active,
    /// Completed tasks, most recent first.
    History,
}

impl TryFrom<&str> for Tab {
    type Error = ParseViewOptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "history" => Ok(Self::History),
            _ => Err(ParseViewOptionError {
                kind: "tab",
                value: value.to_owned(),
            }),
        }
    }
}

/// Which active tasks a projection keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriorityFilter {
    /// Every active task.
    #[default]
    All,
    /// Only tasks of one tier.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns `true` when `priority` passes the filter.
    #[must_use]
    pub fn admits(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParseViewOptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        if matches!(normalized.as_str(), "all" | "semua") {
            return Ok(Self::All);
        }
        Priority::try_from(normalized.as_str())
            .map(Self::Only)
            .map_err(|_| ParseViewOptionError {
                kind: "filter",
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(priority) => write!(f, "{priority}"),
        }
    }
}

/// Ordering applied to the active projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// High before medium before low.
    #[default]
    Priority,
    /// Earliest schedule first.
    #[serde(rename = "date-asc")]
    DateAscending,
    /// Latest schedule first.
    #[serde(rename = "date-desc")]
    DateDescending,
}

impl SortOrder {
    /// Returns the wire name of the order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::DateAscending => "date-asc",
            Self::DateDescending => "date-desc",
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ParseViewOptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "date-asc" | "date-ascending" => Ok(Self::DateAscending),
            "date-desc" | "date-descending" => Ok(Self::DateDescending),
            _ => Err(ParseViewOptionError {
                kind: "sort order",
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
