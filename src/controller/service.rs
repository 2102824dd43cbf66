//! The interaction controller.

use std::time::Duration;

use mockable::Clock;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::{
    CharCount, DescriptionCounter, TaskForm,
    ports::{ConfirmationPrompt, Notification, NotificationSink},
    state::{Listing, UiState, View},
};
use crate::cache::ports::KeyValueStore;
use crate::config::AgendaConfig;
use crate::task::{
    domain::{Task, TaskId, ValidationError},
    services::{TaskRepository, TaskRepositoryError},
};
use crate::view::{PriorityFilter, SortOrder, Tab, project, project_history};

/// Keyboard shortcuts understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: leave edit mode without saving.
    Cancel,
    /// Ctrl+Enter: submit the form.
    Submit,
}

/// Result of an action addressed at a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action took effect; carries the affected task.
    Applied(Task),
    /// The user declined the confirmation; nothing changed.
    Declined,
    /// The task was not where the action expected it; nothing changed.
    Missing(TaskId),
}

/// Errors returned when submitting the task form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more fields were rejected; show them next to their inputs.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The task being edited no longer exists; edit mode was left.
    #[error("task {0} is no longer available for editing")]
    EditedTaskMissing(TaskId),
}

/// Translates user intents into repository operations and fresh views.
pub struct InteractionController<S, C, P, N>
where
    S: KeyValueStore,
    C: Clock,
    P: ConfirmationPrompt,
    N: NotificationSink,
{
    repository: TaskRepository<S, C>,
    prompt: P,
    notifier: N,
    state: UiState,
    form: TaskForm,
    notification_dismiss: Duration,
    debounce_window: Duration,
}

impl<S, C, P, N> InteractionController<S, C, P, N>
where
    S: KeyValueStore,
    C: Clock,
    P: ConfirmationPrompt,
    N: NotificationSink,
{
    /// Creates a controller on the active tab with an empty form.
    #[must_use]
    pub fn new(
        repository: TaskRepository<S, C>,
        prompt: P,
        notifier: N,
        config: &AgendaConfig,
    ) -> Self {
        Self {
            repository,
            prompt,
            notifier,
            state: UiState::default(),
            form: TaskForm::new(config.description_limit),
            notification_dismiss: config.notification_dismiss(),
            debounce_window: config.debounce_window(),
        }
    }

    /// Returns the repository.
    #[must_use]
    pub const fn repository(&self) -> &TaskRepository<S, C> {
        &self.repository
    }

    /// Returns the current selection state.
    #[must_use]
    pub const fn state(&self) -> UiState {
        self.state
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the form for field input.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Creates a debounced character counter for the form's description
    /// field, publishing to `display`.
    #[must_use]
    pub fn description_counter(
        &self,
        runtime: Handle,
        display: impl Fn(CharCount) + Send + Sync + 'static,
    ) -> DescriptionCounter {
        DescriptionCounter::new(
            runtime,
            self.debounce_window,
            self.form.description_limit(),
            display,
        )
    }

    /// Projects the visible tab.
    #[must_use]
    pub fn view(&self) -> View {
        let listing = match self.state.tab {
            Tab::Active => Listing::Active(project(
                self.repository.active(),
                self.state.filter,
                self.state.sort,
            )),
            Tab::History => Listing::History(project_history(
                self.repository.completed(),
                self.repository.now(),
            )),
        };
        View {
            counts: self.repository.counts(),
            listing,
        }
    }

    /// Creates a task from the form, or updates the task being edited.
    ///
    /// On success the form is cleared, edit mode is left, and the active
    /// tab is projected.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] with every rejected field, leaving
    /// the form and repository untouched, or
    /// [`SubmitError::EditedTaskMissing`] when the task under edit has
    /// disappeared.
    pub fn submit(&mut self) -> Result<View, SubmitError> {
        let draft = self.form.draft().clone();
        let result = match self.state.editing {
            Some(id) => self.repository.update(id, &draft),
            None => self.repository.create(&draft),
        };

        match result {
            Ok(task) => {
                let message = if self.state.editing.is_some() {
                    "Activity updated"
                } else {
                    "Activity added"
                };
                debug!(task_id = %task.id(), "form submitted");
                self.leave_edit_mode();
                self.state.tab = Tab::Active;
                self.notify(message);
                Ok(self.view())
            }
            Err(TaskRepositoryError::Validation(error)) => Err(SubmitError::Invalid(error)),
            Err(TaskRepositoryError::NotFound { id, .. }) => {
                warn!(task_id = %id, "edited task vanished before submit");
                self.leave_edit_mode();
                Err(SubmitError::EditedTaskMissing(id))
            }
        }
    }

    /// Loads an active task into the form and enters edit mode.
    pub fn begin_edit(&mut self, id: TaskId) -> ActionOutcome {
        let Some(task) = self.repository.find_active(id).cloned() else {
            warn!(task_id = %id, "cannot edit task that is not active");
            return ActionOutcome::Missing(id);
        };
        self.form.load(&task);
        self.state.editing = Some(id);
        ActionOutcome::Applied(task)
    }

    /// Leaves edit mode and clears the form without touching the
    /// repository.
    pub fn cancel_edit(&mut self) {
        self.leave_edit_mode();
    }

    /// Handles a keyboard shortcut.
    ///
    /// # Errors
    ///
    /// Propagates [`SubmitError`] from [`Self::submit`].
    pub fn handle_shortcut(&mut self, shortcut: Shortcut) -> Result<View, SubmitError> {
        match shortcut {
            Shortcut::Cancel => {
                if self.state.editing.is_some() {
                    self.cancel_edit();
                }
                Ok(self.view())
            }
            Shortcut::Submit => self.submit(),
        }
    }

    /// Shows `tab`.
    pub fn switch_tab(&mut self, tab: Tab) -> View {
        self.state.tab = tab;
        self.view()
    }

    /// Changes the priority filter of the active tab.
    pub fn set_filter(&mut self, filter: PriorityFilter) -> View {
        self.state.filter = filter;
        self.view()
    }

    /// Changes the sort order of the active tab.
    pub fn set_sort(&mut self, sort: SortOrder) -> View {
        self.state.sort = sort;
        self.view()
    }

    /// Marks an active task as done after confirmation.
    pub fn complete(&mut self, id: TaskId) -> ActionOutcome {
        let Some(task) = self.repository.find_active(id) else {
            return missing(id, "complete");
        };
        let question = format!("Mark \"{}\" as completed?", task.activity());
        self.confirmed(id, &question, |repository| repository.complete(id), "Activity completed")
    }

    /// Moves a completed task back to the active list after confirmation.
    pub fn restore(&mut self, id: TaskId) -> ActionOutcome {
        let Some(task) = self.repository.find_completed(id) else {
            return missing(id, "restore");
        };
        let question = format!("Restore \"{}\" to the active list?", task.activity());
        self.confirmed(id, &question, |repository| repository.restore(id), "Activity restored")
    }

    /// Deletes an active task after confirmation.
    pub fn delete(&mut self, id: TaskId) -> ActionOutcome {
        let Some(task) = self.repository.find_active(id) else {
            return missing(id, "delete");
        };
        let question = format!("Delete \"{}\"? This cannot be undone.", task.activity());
        self.confirmed(id, &question, |repository| repository.delete(id), "Activity deleted")
    }

    /// Deletes a completed task after confirmation.
    pub fn delete_from_history(&mut self, id: TaskId) -> ActionOutcome {
        let Some(task) = self.repository.find_completed(id) else {
            return missing(id, "delete from history");
        };
        let question = format!("Remove \"{}\" from history?", task.activity());
        self.confirmed(
            id,
            &question,
            |repository| repository.delete_from_history(id),
            "Activity removed from history",
        )
    }

    fn confirmed(
        &mut self,
        id: TaskId,
        question: &str,
        operation: impl FnOnce(&mut TaskRepository<S, C>) -> Result<Task, TaskRepositoryError>,
        message: &str,
    ) -> ActionOutcome {
        if !self.prompt.confirm(question) {
            debug!(task_id = %id, "confirmation declined");
            return ActionOutcome::Declined;
        }

        match operation(&mut self.repository) {
            Ok(task) => {
                if self.state.editing == Some(id) && self.repository.find_active(id).is_none() {
                    self.leave_edit_mode();
                }
                self.notify(message);
                ActionOutcome::Applied(task)
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "task action failed");
                ActionOutcome::Missing(id)
            }
        }
    }

    fn leave_edit_mode(&mut self) {
        self.state.editing = None;
        self.form.reset();
    }

    fn notify(&self, message: &str) {
        self.notifier.notify(Notification {
            message: message.to_owned(),
            dismiss_after: self.notification_dismiss,
        });
    }
}

fn missing(id: TaskId, action: &str) -> ActionOutcome {
    warn!(task_id = %id, action, "task not found for action");
    ActionOutcome::Missing(id)
}
