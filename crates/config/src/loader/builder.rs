//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Collect raw values from an `EnvSource` or explicit builder methods.
//! - Apply defaults and derivation rules from a `ConfigSchema`.
//! - Ensure the trash directory exists before returning.
//! - Build the final `RuntimeConfig` together with any fallback warnings.
//!
//! Does NOT handle:
//! - Logging (callers emit `LoadOutcome::warnings`).
//! - Terminating the process on failure (the composition root decides).
//!
//! Invariants / Assumptions:
//! - `with_schema()` must be called before `from_source()`/`from_env()` to change keys.
//! - Builder methods called after `from_source()` take precedence over the environment.
//! - No partial `RuntimeConfig` is ever returned.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::env::{EnvSource, ProcessEnv, non_empty_var, non_empty_var_os};
use super::error::ConfigError;
use super::platform::{OsPlatform, Platform};
use super::schema::ConfigSchema;
use super::secret::resolve_secret_key;
use super::warning::{ConfigWarning, LoadOutcome};
use crate::types::RuntimeConfig;

/// Configuration loader that builds `RuntimeConfig` from environment variables.
pub struct ConfigLoader {
    schema: ConfigSchema,
    platform: Box<dyn Platform>,
    data_dir: Option<PathBuf>,
    port: Option<String>,
    storage_url: Option<String>,
    secret_key_hex: Option<String>,
    registration_open_override: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("schema", &self.schema)
            .field("data_dir", &self.data_dir)
            .field("port", &self.port)
            .field("storage_url", &self.storage_url)
            .field(
                "secret_key_hex",
                &self.secret_key_hex.as_ref().map(|_| "[REDACTED]"),
            )
            .field("registration_open_override", &self.registration_open_override)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with the production schema and the real OS.
    pub fn new() -> Self {
        Self {
            schema: ConfigSchema::default(),
            platform: Box::new(OsPlatform),
            data_dir: None,
            port: None,
            storage_url: None,
            secret_key_hex: None,
            registration_open_override: None,
        }
    }

    /// Load the runtime configuration from the process environment.
    ///
    /// Warnings are emitted through `tracing`. On error nothing has been logged;
    /// the caller decides whether to terminate.
    pub fn load() -> Result<RuntimeConfig, ConfigError> {
        let outcome = Self::new().from_env().build()?;
        outcome.log_warnings();
        Ok(outcome.into_config())
    }

    /// Replace the keys and defaults table.
    pub fn with_schema(mut self, schema: ConfigSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Replace the host facilities (working directory, hostname, random source).
    pub fn with_platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Box::new(platform);
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env(self) -> Self {
        self.from_source(&ProcessEnv)
    }

    /// Read configuration from the given variable source.
    ///
    /// Empty values are treated as unset. Values already set via builder
    /// methods are overwritten only by non-empty variables.
    pub fn from_source(mut self, source: &impl EnvSource) -> Self {
        if let Some(dir) = non_empty_var_os(source, self.schema.data_dir.key) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(port) = non_empty_var(source, self.schema.port.key) {
            self.port = Some(port);
        }
        if let Some(url) = non_empty_var(source, self.schema.storage_url_key) {
            self.storage_url = Some(url);
        }
        if let Some(secret) = non_empty_var(source, self.schema.secret_key_key) {
            self.secret_key_hex = Some(secret);
        }
        // Read so the value is visible, but `build()` does not apply it.
        if let Some(open) = non_empty_var(source, self.schema.registration_open_key) {
            self.registration_open_override = Some(open);
        }
        self
    }

    /// Set the data directory. Used verbatim.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the service port. Not validated.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the storage URL. Used verbatim, suppressing synthesis.
    pub fn with_storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = Some(url.into());
        self
    }

    /// Set the hex-encoded signing secret.
    pub fn with_secret_key_hex(mut self, hex: impl Into<String>) -> Self {
        self.secret_key_hex = Some(hex.into());
        self
    }

    /// Raw registration override read from the environment.
    ///
    /// Registration is always open in the built config; this value is not applied.
    pub fn registration_open_override(&self) -> Option<&str> {
        self.registration_open_override.as_deref()
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::CurrentDir` if the default data directory cannot be absolutized.
    /// - `ConfigError::CreateDir` if the trash directory cannot be created.
    /// - `ConfigError::RandomSource` if a secret must be generated and the OS RNG fails.
    pub fn build(self) -> Result<LoadOutcome, ConfigError> {
        let schema = &self.schema;
        let platform = self.platform.as_ref();
        let mut warnings = Vec::new();

        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => platform
                .current_dir()
                .map_err(|source| ConfigError::CurrentDir {
                    var: schema.data_dir.key.to_string(),
                    source,
                })?
                .join(schema.data_dir.default),
        };

        let trash_dir = data_dir.join(schema.trash_dir_name);
        create_private_dir_all(&trash_dir, schema.trash_dir_mode).map_err(|source| {
            ConfigError::CreateDir {
                path: trash_dir.clone(),
                source,
            }
        })?;

        let port = self
            .port
            .unwrap_or_else(|| schema.port.default.to_string());

        let storage_url = match self.storage_url {
            Some(url) => url,
            None => {
                let host = platform.hostname().unwrap_or_else(|e| {
                    warnings.push(ConfigWarning::HostnameUnavailable {
                        var: schema.storage_url_key,
                        placeholder: schema.placeholder_host,
                        reason: e.to_string(),
                    });
                    schema.placeholder_host.to_string()
                });
                format!("http://{host}:{port}")
            }
        };

        let (secret_key, secret_warning) = resolve_secret_key(
            self.secret_key_hex.as_deref(),
            schema.secret_key_key,
            schema.generated_secret_len,
            platform,
        )?;
        warnings.extend(secret_warning);

        Ok(LoadOutcome {
            config: RuntimeConfig {
                port,
                storage_url,
                data_dir,
                trash_dir,
                secret_key,
                registration_open: true,
            },
            warnings,
        })
    }
}

/// Create `path` and any missing ancestors, restricting new directories to `mode` on Unix.
fn create_private_dir_all(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path)
}
