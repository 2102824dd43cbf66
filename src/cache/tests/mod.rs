//! Unit tests for the expiring cache.

mod expiring_tests;
