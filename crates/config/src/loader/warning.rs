//! Degraded-but-continue diagnostics produced while loading.
//!
//! Responsibilities:
//! - Describe every condition where a fallback was used instead of operator input.
//! - Emit those diagnostics through `tracing` when the caller asks for it.
//!
//! Does NOT handle:
//! - Fatal conditions (see `error.rs`).
//!
//! Invariants:
//! - `ConfigLoader::build` never logs; it returns warnings inside `LoadOutcome`.
//! - Each warning names the affected variable and its consequence.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::types::RuntimeConfig;

/// A fallback the loader applied.
#[derive(Debug, Clone)]
pub enum ConfigWarning {
    /// The hostname lookup failed; the storage URL uses a placeholder host.
    HostnameUnavailable {
        var: &'static str,
        placeholder: &'static str,
        reason: String,
    },
    /// No usable secret key was supplied; a random one was generated for this run.
    EphemeralSecretKey {
        var: &'static str,
        /// Uppercase hex of the generated key, to be pinned by the operator.
        suggestion: SecretString,
    },
}

impl ConfigWarning {
    /// The environment variable this warning is about.
    pub fn var(&self) -> &'static str {
        match self {
            Self::HostnameUnavailable { var, .. } | Self::EphemeralSecretKey { var, .. } => var,
        }
    }

    /// Emit this warning as `tracing` events.
    pub fn log(&self) {
        match self {
            Self::HostnameUnavailable {
                var,
                placeholder,
                reason,
            } => {
                tracing::warn!(
                    variable = var,
                    placeholder = placeholder,
                    error = %reason,
                    "cannot get hostname, synthesizing {} with placeholder host",
                    var
                );
            }
            Self::EphemeralSecretKey { var, suggestion } => {
                tracing::warn!(
                    "You have to set {} with some content. Eg: {}='{}'",
                    var,
                    var,
                    suggestion.expose_secret()
                );
                tracing::warn!(
                    "  without {} set, every issued session and token becomes invalid after this program restarts",
                    var
                );
            }
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostnameUnavailable {
                var,
                placeholder,
                reason,
            } => write!(
                f,
                "cannot get hostname ({reason}); {var} synthesized with placeholder host {placeholder}"
            ),
            Self::EphemeralSecretKey { var, .. } => write!(
                f,
                "{var} is unset or invalid; a random key was generated and sessions will not survive a restart"
            ),
        }
    }
}

/// A fully built configuration plus the fallbacks used to build it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub config: RuntimeConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadOutcome {
    /// Emit all warnings through `tracing`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warning.log();
        }
    }

    pub fn into_config(self) -> RuntimeConfig {
        self.config
    }
}
