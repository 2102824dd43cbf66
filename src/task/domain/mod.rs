//! Domain model for tasks.
//!
//! Tasks are plain values; the only way to move them between the active and
//! completed collections is through
//! [`TaskRepository`](crate::task::services::TaskRepository).

mod error;
mod fields;
mod ids;
mod priority;
mod task;

pub use error::{FieldError, FieldErrorKind, ParsePriorityError, TaskField, ValidationError};
pub use fields::{TaskDraft, TaskFields, parse_schedule};
pub use ids::{IdGenerator, TaskId};
pub use priority::Priority;
pub use task::Task;
