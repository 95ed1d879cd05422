//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test defaults and builder overrides.
//! - Test environment variable handling and schema overrides.
//! - Test directory derivation and creation, storage URL synthesis, and secret provisioning.
//! - Pin the current registration behavior.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `env_lock()`.
//! - All other tests read from map-backed sources and a `FakePlatform`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::sync::Mutex;

pub mod storage_url_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a map-backed variable source.
pub fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
