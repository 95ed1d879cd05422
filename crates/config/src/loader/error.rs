//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define one variant per fatal setup failure.
//!
//! Does NOT handle:
//! - Degraded-but-continue conditions (see `warning.rs`).
//! - Deciding to terminate the process (the composition root does that).
//!
//! Invariants:
//! - Every variant names what was being resolved (path or variable).
//! - Error messages never include secret key material.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable failures while building the runtime configuration.
///
/// All variants indicate a broken host environment. None is worth retrying
/// within the same invocation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to resolve the working directory for default {var}")]
    CurrentDir {
        var: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Secure random source failed while generating {var}")]
    RandomSource {
        var: String,
        #[source]
        source: io::Error,
    },
}
