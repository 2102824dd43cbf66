//! Unit tests for the interaction controller and its helpers.
