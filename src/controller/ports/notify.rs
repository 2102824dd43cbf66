//! Transient notifications shown after successful mutations.

use std::time::Duration;

/// A short message to display and dismiss after a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Human-readable text.
    pub message: String,
    /// How long the message stays visible.
    pub dismiss_after: Duration,
}

/// Receiver of notifications.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Displays `notification`.
    fn notify(&self, notification: Notification);
}
