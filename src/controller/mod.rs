//! Interaction controller translating user intents into repository calls.
//!
//! The controller owns the UI selection state (tab, filter, sort, edit
//! mode) and the task form. Rendering, confirmation dialogs, and
//! notifications are reached through the traits in [`ports`]; simple
//! implementations live in [`adapters`].

pub mod adapters;
mod debounce;
mod form;
pub mod ports;
mod service;
mod state;

pub use debounce::{CharCount, DescriptionCounter, Debouncer};
pub use form::TaskForm;
pub use service::{ActionOutcome, InteractionController, Shortcut, SubmitError};
pub use state::{Listing, UiState, View};

#[cfg(test)]
mod tests;
