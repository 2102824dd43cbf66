//! In-memory confirmation and notification collaborators.

use std::sync::{Arc, PoisonError, RwLock};

use crate::controller::ports::{ConfirmationPrompt, Notification, NotificationSink};

/// Prompt that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmationPrompt for FixedAnswer {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}

/// Sink that records every notification it receives.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded messages in arrival order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|notification| notification.message.clone())
            .collect()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
