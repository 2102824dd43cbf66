//! Ready-made collaborators for headless use and tests.

mod memory;

pub use memory::{FixedAnswer, NotificationLog};
