//! Unit tests for the task domain and repository.
