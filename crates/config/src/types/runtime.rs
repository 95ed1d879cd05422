//! The process-wide runtime configuration record.
//!
//! Responsibilities:
//! - Hold the resolved port, storage URL, data and trash directories, signing secret,
//!   and registration flag.
//! - Expose them read-only for the lifetime of the process.
//!
//! Does NOT handle:
//! - Resolving any of the values (see `loader` module).
//! - Persisting the configuration anywhere.
//!
//! Invariants:
//! - Constructed only by `ConfigLoader::build`, never partially.
//! - Never mutated after construction; there are no setters.
//! - `trash_dir` is always `data_dir.join("trash")` and existed when the record was built.
//! - `registration_open` is always true; `OPEN_REGISTRATION` is read but not applied.

use std::path::{Path, PathBuf};

use super::secret::SecretKey;

/// Immutable runtime configuration shared by reference across the server.
#[derive(Debug)]
pub struct RuntimeConfig {
    pub(crate) port: String,
    pub(crate) storage_url: String,
    pub(crate) data_dir: PathBuf,
    pub(crate) trash_dir: PathBuf,
    pub(crate) secret_key: SecretKey,
    pub(crate) registration_open: bool,
}

impl RuntimeConfig {
    /// Service port as text. Not validated as a number.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Externally reachable base address of the storage endpoint.
    pub fn storage_url(&self) -> &str {
        &self.storage_url
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory for soft-deleted content.
    pub fn trash_dir(&self) -> &Path {
        &self.trash_dir
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Whether new users may self-register.
    ///
    /// Currently always true regardless of `OPEN_REGISTRATION`.
    pub fn registration_open(&self) -> bool {
        self.registration_open
    }
}
