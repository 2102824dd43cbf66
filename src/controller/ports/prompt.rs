//! Confirmation gate for destructive operations.

/// Synchronous yes/no question put to the user.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt {
    /// Asks `question` and returns `true` when the user agrees.
    fn confirm(&self, question: &str) -> bool;
}
