//! Environment variable sources for configuration.
//!
//! Responsibilities:
//! - Define the `EnvSource` capability the loader reads variables through.
//! - Provide the process environment implementation and map-backed implementations for tests.
//! - Provide the helper that treats empty values as unset.
//!
//! Does NOT handle:
//! - Defaults or derivation rules (see `schema.rs` and `builder.rs`).
//!
//! Invariants:
//! - Empty environment variables are treated as unset.
//! - Non-empty values are returned verbatim (no trimming).
//! - Non-UTF-8 values are treated as unset by `get`; `get_os` returns them for path settings.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;

/// A read-only view of named configuration variables.
pub trait EnvSource {
    /// Return the raw value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Return the raw value of `key` without requiring UTF-8.
    fn get_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn get_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Read a variable, returning None if unset or empty.
pub fn non_empty_var(source: &impl EnvSource, key: &str) -> Option<String> {
    source.get(key).filter(|value| !value.is_empty())
}

/// Read a variable as an OS string, returning None if unset or empty.
pub fn non_empty_var_os(source: &impl EnvSource, key: &str) -> Option<OsString> {
    source.get_os(key).filter(|value| !value.is_empty())
}

/// Read a process environment variable, returning None if unset or empty.
pub fn env_var_or_none(key: &str) -> Option<String> {
    non_empty_var(&ProcessEnv, key)
}
