//! Read-only projections of repository state for display.
//!
//! Projections are pure functions of their inputs and are recomputed on
//! every state, filter, sort, or tab change.

mod options;
mod projection;

pub use options::{ParseViewOptionError, PriorityFilter, SortOrder, Tab};
pub use projection::{HistoryProjection, TRAILING_WEEK, project, project_history};
