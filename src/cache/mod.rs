//! Expiring key-value cache.
//!
//! Values are wrapped in a timestamped envelope before being written to a
//! [`ports::KeyValueStore`]. Reads treat envelopes older than the configured
//! time-to-live as absent and evict them.
//!
//! - Port contract in [`ports`]
//! - In-memory store in [`adapters`]
//! - Envelope handling in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
