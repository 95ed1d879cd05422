//! Declarative table of configuration keys and defaults.
//!
//! Responsibilities:
//! - Name the environment key and default for every setting the loader resolves.
//! - Let tests swap keys or defaults without touching the process environment.
//!
//! Does NOT handle:
//! - Reading variables or applying the derivation rules (see `builder.rs`).
//!
//! Invariants:
//! - `ConfigSchema::default()` is the production table built from `crate::constants`.

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TRASH_DIR, DEFAULT_TRASH_DIR_MODE,
    ENV_DATA_DIR, ENV_JWT_SECRET_KEY, ENV_OPEN_REGISTRATION, ENV_PORT, ENV_STORAGE_URL,
    GENERATED_SECRET_KEY_LEN,
};

/// An environment key with the value used when it is unset or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    pub key: &'static str,
    pub default: &'static str,
}

/// Keys, defaults, and derivation constants for `RuntimeConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSchema {
    /// Data directory. The default is relative and resolved against the working directory.
    pub data_dir: Setting,
    /// Trash directory name under the data directory. Not configurable from the environment.
    pub trash_dir_name: &'static str,
    /// Unix permission bits for created trash directories.
    pub trash_dir_mode: u32,
    pub port: Setting,
    /// Storage URL key. When unset the URL is synthesized as `http://<host>:<port>`.
    pub storage_url_key: &'static str,
    /// Host used in the synthesized URL when the hostname cannot be determined.
    pub placeholder_host: &'static str,
    /// Hex-encoded secret key variable.
    pub secret_key_key: &'static str,
    /// Byte length of a generated secret.
    pub generated_secret_len: usize,
    /// Registration toggle. Read but not applied.
    pub registration_open_key: &'static str,
}

impl Default for ConfigSchema {
    fn default() -> Self {
        Self {
            data_dir: Setting {
                key: ENV_DATA_DIR,
                default: DEFAULT_DATA_DIR,
            },
            trash_dir_name: DEFAULT_TRASH_DIR,
            trash_dir_mode: DEFAULT_TRASH_DIR_MODE,
            port: Setting {
                key: ENV_PORT,
                default: DEFAULT_PORT,
            },
            storage_url_key: ENV_STORAGE_URL,
            placeholder_host: DEFAULT_HOST,
            secret_key_key: ENV_JWT_SECRET_KEY,
            generated_secret_len: GENERATED_SECRET_KEY_LEN,
            registration_open_key: ENV_OPEN_REGISTRATION,
        }
    }
}
