//! Logging bootstrap driven by `LOGLEVEL`.
//!
//! Responsibilities:
//! - Map `LOGLEVEL` values to a `tracing` level filter.
//! - Install the global `tracing-subscriber` registry writing to stderr.
//!
//! Does NOT handle:
//! - Emitting configuration warnings (see `rmfake_config::LoadOutcome::log_warnings`).
//!
//! Invariants:
//! - Level names are case-insensitive; `warning`, `fatal` and `panic` are accepted.
//! - Unknown values fall back to `info`; the caller is told so it can warn once logging works.

use std::io::IsTerminal;

use rmfake_config::constants::ENV_LOG_LEVEL;
use rmfake_config::env_var_or_none;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level used when `LOGLEVEL` is unset or unrecognized.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parse a `LOGLEVEL` value.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "error" | "fatal" | "panic" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Outcome of resolving `LOGLEVEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChoice {
    pub level: LevelFilter,
    /// The raw value, if it was set but not understood.
    pub rejected: Option<String>,
}

pub fn resolve_level(raw: Option<String>) -> LevelChoice {
    match raw {
        None => LevelChoice {
            level: DEFAULT_LEVEL,
            rejected: None,
        },
        Some(raw) => match parse_level(&raw) {
            Some(level) => LevelChoice {
                level,
                rejected: None,
            },
            None => LevelChoice {
                level: DEFAULT_LEVEL,
                rejected: Some(raw),
            },
        },
    }
}

/// Install the global subscriber using `LOGLEVEL` from the process environment.
pub fn init() -> anyhow::Result<LevelChoice> {
    let choice = resolve_level(env_var_or_none(ENV_LOG_LEVEL));

    let filter = EnvFilter::builder()
        .with_default_directive(choice.level.into())
        .parse_lossy("");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()?;

    if let Some(ref rejected) = choice.rejected {
        tracing::warn!(
            value = %rejected,
            "unknown {} value, falling back to {}",
            ENV_LOG_LEVEL,
            DEFAULT_LEVEL
        );
    }

    Ok(choice)
}
