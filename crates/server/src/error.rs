//! Process exit codes for the server bootstrap.
//!
//! Responsibilities:
//! - Define structured exit codes so supervisors can tell setup failures apart.
//! - Map `ConfigError` to its exit code.
//!
//! Invariants:
//! - Every `ConfigError` is a setup failure; none is retryable within the same invocation.

use rmfake_config::ConfigError;

/// Structured exit codes for rmfake-server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration resolved.
    Success = 0,

    /// General error - logging could not be initialized or another unexpected failure.
    GeneralError = 1,

    /// Setup failure - the host environment cannot satisfy a startup precondition
    /// (working directory, data directory, random source).
    SetupFailed = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for mapping errors to exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for ConfigError {
    fn exit_code(&self) -> ExitCode {
        match self {
            ConfigError::CurrentDir { .. }
            | ConfigError::CreateDir { .. }
            | ConfigError::RandomSource { .. } => ExitCode::SetupFailed,
        }
    }
}
