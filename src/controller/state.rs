//! UI selection state and the view handed to the renderer.

use crate::task::{domain::{Task, TaskId}, services::TaskCounts};
use crate::view::{HistoryProjection, PriorityFilter, SortOrder, Tab};

/// Selections that drive projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Visible tab.
    pub tab: Tab,
    /// Priority filter for the active tab.
    pub filter: PriorityFilter,
    /// Sort order for the active tab.
    pub sort: SortOrder,
    /// Task whose fields are loaded in the form, if editing.
    pub editing: Option<TaskId>,
}

/// What the renderer should list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Filtered and sorted active tasks.
    Active(Vec<Task>),
    /// Completed tasks with statistics.
    History(HistoryProjection),
}

/// Everything needed to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Badge and filter-chip counts.
    pub counts: TaskCounts,
    /// Content of the visible tab.
    pub listing: Listing,
}

impl View {
    /// Returns the listed tasks regardless of tab.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        match &self.listing {
            Listing::Active(tasks) => tasks,
            Listing::History(history) => &history.tasks,
        }
    }

    /// Returns the history projection when the history tab is shown.
    #[must_use]
    pub const fn history(&self) -> Option<&HistoryProjection> {
        match &self.listing {
            Listing::Active(_) => None,
            Listing::History(history) => Some(history),
        }
    }
}
