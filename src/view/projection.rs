//! Projection functions over task collections.

use chrono::{DateTime, TimeDelta, Utc};
use std::cmp::Reverse;

use super::{PriorityFilter, SortOrder};
use crate::task::domain::Task;

/// Window used for the "completed this week" statistic.
pub const TRAILING_WEEK: TimeDelta = TimeDelta::days(7);

/// Filters and sorts active tasks for display.
///
/// All orders are stable: tasks that compare equal keep their input order.
#[must_use]
pub fn project(active: &[Task], filter: PriorityFilter, sort: SortOrder) -> Vec<Task> {
    let mut tasks: Vec<Task> = active
        .iter()
        .filter(|task| filter.admits(task.priority()))
        .cloned()
        .collect();

    match sort {
        SortOrder::Priority => tasks.sort_by_key(|task| task.priority().rank()),
        SortOrder::DateAscending => tasks.sort_by_key(Task::schedule),
        SortOrder::DateDescending => tasks.sort_by_key(|task| Reverse(task.schedule())),
    }

    tasks
}

/// Completed tasks with their summary statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryProjection {
    /// Completed tasks, most recently completed first.
    pub tasks: Vec<Task>,
    /// Number of completed tasks.
    pub total: usize,
    /// Tasks completed within the trailing seven days.
    pub this_week: usize,
}

/// Orders the history by completion date, newest first, and computes its
/// statistics relative to `now`.
///
/// The week is a trailing window of seven 24-hour days ending at `now`,
/// boundary included.
#[must_use]
pub fn project_history(completed: &[Task], now: DateTime<Utc>) -> HistoryProjection {
    let mut tasks = completed.to_vec();
    tasks.sort_by_key(|task| Reverse(task.completed_date()));

    let week_start = now - TRAILING_WEEK;
    let this_week = tasks
        .iter()
        .filter_map(Task::completed_date)
        .filter(|completed_at| *completed_at >= week_start)
        .count();

    HistoryProjection {
        total: tasks.len(),
        this_week,
        tasks,
    }
}
