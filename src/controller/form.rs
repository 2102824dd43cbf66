//! Task input form state.

use crate::task::domain::{Task, TaskDraft};

/// The create/edit form as the controller sees it.
///
/// The description is capped at a fixed number of characters; longer input
/// is cut at the limit, the way a `maxlength` input behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    draft: TaskDraft,
    description_limit: usize,
}

impl TaskForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new(description_limit: usize) -> Self {
        Self {
            draft: TaskDraft::default(),
            description_limit,
        }
    }

    /// Returns the raw field values.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the description character limit.
    #[must_use]
    pub const fn description_limit(&self) -> usize {
        self.description_limit
    }

    /// Sets the activity field.
    pub fn set_activity(&mut self, value: impl Into<String>) {
        self.draft.activity = value.into();
    }

    /// Sets the description field, truncated to the limit.
    pub fn set_description(&mut self, value: &str) {
        self.draft.description = value.chars().take(self.description_limit).collect();
    }

    /// Sets the schedule field.
    pub fn set_schedule(&mut self, value: impl Into<String>) {
        self.draft.schedule = value.into();
    }

    /// Sets the priority field.
    pub fn set_priority(&mut self, value: impl Into<String>) {
        self.draft.priority = value.into();
    }

    /// Replaces every field at once, applying the description limit.
    pub fn fill(&mut self, draft: TaskDraft) {
        let description = draft.description.clone();
        self.draft = draft;
        self.set_description(&description);
    }

    /// Loads the fields of `task` for editing.
    pub fn load(&mut self, task: &Task) {
        self.fill(TaskDraft::from_task(task));
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.draft = TaskDraft::default();
    }

    /// Returns the number of characters in the description.
    #[must_use]
    pub fn description_len(&self) -> usize {
        self.draft.description.chars().count()
    }
}
