//! Common test utilities for student record tests
//!
//! Shared fixtures and assertions used by the unit tests in each module.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
