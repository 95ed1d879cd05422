//! Centralized constants for the rmfake workspace.
//!
//! This module contains environment variable names and default values used
//! across crates to avoid magic string duplication.

// =============================================================================
// Runtime Configuration Variables
// =============================================================================

/// Logging verbosity, consumed by the server's logging bootstrap.
pub const ENV_LOG_LEVEL: &str = "LOGLEVEL";

/// Base data directory.
pub const ENV_DATA_DIR: &str = "DATADIR";

/// Service port.
pub const ENV_PORT: &str = "PORT";

/// Externally reachable storage endpoint.
pub const ENV_STORAGE_URL: &str = "STORAGE_URL";

/// Hex-encoded signing secret for session tokens.
pub const ENV_JWT_SECRET_KEY: &str = "JWT_SECRET_KEY";

/// Self-registration toggle. Read by the loader but not applied.
pub const ENV_OPEN_REGISTRATION: &str = "OPEN_REGISTRATION";

// =============================================================================
// Collaborator Pass-Through Variables
// =============================================================================

pub const ENV_SMTP_SERVER: &str = "RM_SMTP_SERVER";
pub const ENV_SMTP_USERNAME: &str = "RM_SMTP_USERNAME";
pub const ENV_SMTP_PASSWORD: &str = "RM_SMTP_PASSWORD";
pub const ENV_SMTP_HELO: &str = "RM_SMTP_HELO";
pub const ENV_SMTP_INSECURE_TLS: &str = "RM_SMTP_INSECURE_TLS";
pub const ENV_SMTP_FROM: &str = "RM_SMTP_FROM";

/// MyScript handwriting recognition application key.
pub const ENV_HWR_APPLICATION_KEY: &str = "RMAPI_HWR_APPLICATIONKEY";

/// MyScript handwriting recognition HMAC key.
pub const ENV_HWR_HMAC: &str = "RMAPI_HWR_HMAC";

// =============================================================================
// Defaults
// =============================================================================

/// Default service port.
pub const DEFAULT_PORT: &str = "3000";

/// Default data directory, resolved against the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Name of the trash directory under the data directory.
pub const DEFAULT_TRASH_DIR: &str = "trash";

/// Permission bits for the trash directory (owner only).
pub const DEFAULT_TRASH_DIR_MODE: u32 = 0o700;

/// Placeholder hostname used when the local hostname cannot be determined.
pub const DEFAULT_HOST: &str = "local.appspot.com";

/// Length in bytes of a generated signing secret.
pub const GENERATED_SECRET_KEY_LEN: usize = 32;
