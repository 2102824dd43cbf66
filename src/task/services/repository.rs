//! Task repository owning the active and completed collections.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use thiserror::Error;
use tracing::{info, warn};

use crate::cache::{ports::KeyValueStore, services::ExpiringCache};
use crate::config::AgendaConfig;
use crate::task::domain::{
    IdGenerator, Priority, Task, TaskDraft, TaskFields, TaskId, ValidationError,
};

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// The two collections a task can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCollection {
    /// Tasks not yet completed.
    Active,
    /// Completed tasks (the history).
    Completed,
}

impl fmt::Display for TaskCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Completed => "completed",
        })
    }
}

/// Errors returned by task repository operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// One or more input fields were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task is not in the collection the operation targets.
    #[error("task {id} not found in {collection} tasks")]
    NotFound {
        /// Requested task identifier.
        id: TaskId,
        /// Collection that was searched.
        collection: TaskCollection,
    },
}

/// Storage keys for the two persisted snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotKeys {
    /// Key of the active snapshot.
    pub active: String,
    /// Key of the completed snapshot.
    pub completed: String,
}

impl SnapshotKeys {
    /// Reads the snapshot keys from `config`.
    #[must_use]
    pub fn from_config(config: &AgendaConfig) -> Self {
        Self {
            active: config.active_key.clone(),
            completed: config.completed_key.clone(),
        }
    }
}

impl Default for SnapshotKeys {
    fn default() -> Self {
        Self::from_config(&AgendaConfig::default())
    }
}

/// Derived task counts for badges and filter chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Number of active tasks.
    pub active: usize,
    /// Active tasks with high priority.
    pub high: usize,
    /// Active tasks with medium priority.
    pub medium: usize,
    /// Active tasks with low priority.
    pub low: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Returns the active count for `priority`.
    #[must_use]
    pub const fn for_priority(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Owner of the active and completed task collections.
///
/// Every successful mutation writes both collections to the cache. A failed
/// write is logged and otherwise ignored: the in-memory collections stay
/// authoritative for the rest of the session.
#[derive(Debug)]
pub struct TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    cache: ExpiringCache<S, C>,
    keys: SnapshotKeys,
    ids: IdGenerator,
    active: Vec<Task>,
    completed: Vec<Task>,
}

impl<S, C> TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates a repository hydrated from any fresh snapshots in `cache`.
    #[must_use]
    pub fn load(cache: ExpiringCache<S, C>, keys: SnapshotKeys) -> Self {
        let stored_active: Vec<Task> = cache.get(&keys.active).unwrap_or_default();
        let stored_completed: Vec<Task> = cache.get(&keys.completed).unwrap_or_default();
        let (active, completed) = repair(stored_active, stored_completed);
        let ids = IdGenerator::seeded(active.iter().chain(&completed).map(Task::id));

        info!(
            active = active.len(),
            completed = completed.len(),
            "loaded task snapshots"
        );

        Self {
            cache,
            keys,
            ids,
            active,
            completed,
        }
    }

    /// Creates a repository over `store` using the cache settings in
    /// `config`.
    #[must_use]
    pub fn from_config(store: S, clock: Arc<C>, config: &AgendaConfig) -> Self {
        Self::load(
            ExpiringCache::new(store, clock, config.cache_ttl()),
            SnapshotKeys::from_config(config),
        )
    }

    /// Returns the active tasks in insertion order.
    #[must_use]
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Returns the completed tasks in completion order.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Finds an active task.
    #[must_use]
    pub fn find_active(&self, id: TaskId) -> Option<&Task> {
        self.active.iter().find(|task| task.id() == id)
    }

    /// Finds a completed task.
    #[must_use]
    pub fn find_completed(&self, id: TaskId) -> Option<&Task> {
        self.completed.iter().find(|task| task.id() == id)
    }

    /// Returns the current time according to the repository clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.cache.now()
    }

    /// Counts active tasks per priority and completed tasks.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let mut counts = TaskCounts {
            active: self.active.len(),
            completed: self.completed.len(),
            ..TaskCounts::default()
        };
        for task in &self.active {
            match task.priority() {
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Validates `draft` and appends a new active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when any field is
    /// rejected; the collections are left untouched.
    pub fn create(&mut self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let fields = TaskFields::parse(draft)?;
        let id = self.ids.next_id(self.now());
        let task = Task::new(id, fields);
        self.active.push(task.clone());
        info!(task_id = %id, priority = %task.priority(), "created task");
        self.persist();
        Ok(task)
    }

    /// Replaces the fields of an active task in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is not active
    /// and [`TaskRepositoryError::Validation`] when any field is rejected.
    pub fn update(&mut self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let position = self.position(TaskCollection::Active, id)?;
        let fields = TaskFields::parse(draft)?;
        let task = self
            .active
            .get_mut(position)
            .ok_or_else(|| not_found(TaskCollection::Active, id))?;
        task.apply(fields);
        let updated = task.clone();
        info!(task_id = %id, "updated task");
        self.persist();
        Ok(updated)
    }

    /// Moves an active task to the history, stamping its completion date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is not active.
    pub fn complete(&mut self, id: TaskId) -> TaskRepositoryResult<Task> {
        let position = self.position(TaskCollection::Active, id)?;
        let mut task = self.active.remove(position);
        task.mark_completed(self.now());
        self.completed.push(task.clone());
        info!(task_id = %id, "completed task");
        self.persist();
        Ok(task)
    }

    /// Moves a completed task back to the active list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is not in the
    /// history.
    pub fn restore(&mut self, id: TaskId) -> TaskRepositoryResult<Task> {
        let position = self.position(TaskCollection::Completed, id)?;
        let mut task = self.completed.remove(position);
        task.mark_active();
        self.active.push(task.clone());
        info!(task_id = %id, "restored task");
        self.persist();
        Ok(task)
    }

    /// Permanently removes an active task, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is not active.
    pub fn delete(&mut self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.remove_from(TaskCollection::Active, id)
    }

    /// Permanently removes a completed task, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is not in the
    /// history.
    pub fn delete_from_history(&mut self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.remove_from(TaskCollection::Completed, id)
    }

    fn remove_from(&mut self, collection: TaskCollection, id: TaskId) -> TaskRepositoryResult<Task> {
        let position = self.position(collection, id)?;
        let task = self.collection_mut(collection).remove(position);
        info!(task_id = %id, %collection, "deleted task");
        self.persist();
        Ok(task)
    }

    fn position(&self, collection: TaskCollection, id: TaskId) -> TaskRepositoryResult<usize> {
        let tasks = match collection {
            TaskCollection::Active => &self.active,
            TaskCollection::Completed => &self.completed,
        };
        tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| not_found(collection, id))
    }

    fn collection_mut(&mut self, collection: TaskCollection) -> &mut Vec<Task> {
        match collection {
            TaskCollection::Active => &mut self.active,
            TaskCollection::Completed => &mut self.completed,
        }
    }

    fn persist(&self) {
        for (key, tasks) in [
            (&self.keys.active, &self.active),
            (&self.keys.completed, &self.completed),
        ] {
            if let Err(err) = self.cache.put(key, tasks) {
                warn!(key = %key, error = %err, "failed to persist task snapshot");
            }
        }
    }
}

const fn not_found(collection: TaskCollection, id: TaskId) -> TaskRepositoryError {
    TaskRepositoryError::NotFound { id, collection }
}

/// Restores the collection invariants on snapshots written by older or
/// hand-edited state: ids are unique across both collections and only
/// completed tasks carry a completion date. Blank descriptions become
/// absent.
fn repair(stored_active: Vec<Task>, stored_completed: Vec<Task>) -> (Vec<Task>, Vec<Task>) {
    let mut seen = HashSet::new();

    let active = stored_active
        .into_iter()
        .filter(|task| keep_unique(&mut seen, task))
        .map(|mut task| {
            if task.is_completed() {
                warn!(task_id = %task.id(), "clearing completion date on active task");
                task.mark_active();
            }
            normalise(task)
        })
        .collect();

    let completed = stored_completed
        .into_iter()
        .filter(|task| {
            if !task.is_completed() {
                warn!(task_id = %task.id(), "dropping completed task without completion date");
                return false;
            }
            keep_unique(&mut seen, task)
        })
        .map(normalise)
        .collect();

    (active, completed)
}

fn normalise(mut task: Task) -> Task {
    if task.normalise_description() {
        warn!(task_id = %task.id(), "normalised blank or padded description");
    }
    task
}

fn keep_unique(seen: &mut HashSet<TaskId>, task: &Task) -> bool {
    let fresh = seen.insert(task.id());
    if !fresh {
        warn!(task_id = %task.id(), "dropping duplicate task from snapshot");
    }
    fresh
}
