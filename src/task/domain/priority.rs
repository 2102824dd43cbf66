//! Priority tiers.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance of a task. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Important.
    #[serde(alias = "penting")]
    High,
    /// Fairly important.
    #[serde(alias = "lumayan")]
    Medium,
    /// Not very important.
    #[serde(alias = "tidak")]
    Low,
}

impl Priority {
    /// All tiers, most important first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Returns the human-readable label shown next to a task.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "important",
            Self::Medium => "fairly important",
            Self::Low => "not very important",
        }
    }

    /// Returns the sort rank; lower ranks sort first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" | "penting" => Ok(Self::High),
            "medium" | "lumayan" => Ok(Self::Medium),
            "low" | "tidak" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
