//! Storage adapters for the expiring cache.

pub mod memory;

pub use memory::InMemoryStore;
