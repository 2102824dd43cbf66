//! Cache services layered over a key-value store.

mod expiring;

pub use expiring::{CacheEnvelope, CacheError, ExpiringCache};
