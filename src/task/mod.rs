//! Task state management.
//!
//! Owns the two task collections (active and completed), validates raw
//! input into task fields, and persists every mutation through the expiring
//! cache. The module is split into:
//!
//! - Domain types in [`domain`]
//! - The repository service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
