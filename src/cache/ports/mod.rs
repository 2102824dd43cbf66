//! Port contracts for cache storage backends.

pub mod store;

pub use store::{KeyValueStore, StoreError};
