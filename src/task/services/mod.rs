//! Application services for task state management.

mod repository;

pub use repository::{
    SnapshotKeys, TaskCollection, TaskCounts, TaskRepository, TaskRepositoryError,
    TaskRepositoryResult,
};
