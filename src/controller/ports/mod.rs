//! Port contracts for the controller's external collaborators.

pub mod notify;
pub mod prompt;

pub use notify::{Notification, NotificationSink};
pub use prompt::ConfirmationPrompt;

#[cfg(test)]
pub use notify::MockNotificationSink;
#[cfg(test)]
pub use prompt::MockConfirmationPrompt;
