//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that resolves `RuntimeConfig`.
//! - Define the `EnvSource` and `Platform` capabilities the loader reads through.
//! - Report fallbacks as `ConfigWarning` values instead of logging during construction.
//!
//! Does NOT handle:
//! - Config files of any format.
//! - Logging initialization or process termination (see the server crate).
//!
//! Invariants / Assumptions:
//! - Empty environment values are treated as unset.
//! - The loader either returns a complete `RuntimeConfig` or a `ConfigError`.

mod builder;
mod env;
mod error;
mod platform;
mod schema;
mod secret;
mod warning;

pub use builder::ConfigLoader;
pub use env::{EnvSource, ProcessEnv, env_var_or_none, non_empty_var, non_empty_var_os};
pub use error::ConfigError;
pub use platform::{OsPlatform, Platform};
pub use schema::{ConfigSchema, Setting};
pub use warning::{ConfigWarning, LoadOutcome};

#[cfg(test)]
mod tests;
