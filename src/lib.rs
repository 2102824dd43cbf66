//! Agenda: a task list manager core.
//!
//! Users create, edit, prioritise, complete, and restore short-lived
//! activities. State lives in memory and is mirrored into an expiring
//! key-value cache so that it survives reloads for up to an hour.
//!
//! # Architecture
//!
//! Agenda follows hexagonal architecture principles:
//!
//! - **Domain**: task values and validation with no infrastructure
//!   dependencies
//! - **Ports**: trait interfaces for storage, confirmation dialogs, and
//!   notifications
//! - **Adapters**: in-memory implementations of those ports
//!
//! # Modules
//!
//! - [`cache`]: timestamped key-value cache with time-to-live expiry
//! - [`task`]: the task repository and its domain model
//! - [`view`]: filtered, sorted projections for display
//! - [`controller`]: user intents, edit mode, and confirmations
//! - [`config`]: tunable limits and timings

pub mod cache;
pub mod clock;
pub mod config;
pub mod controller;
pub mod task;
pub mod view;
