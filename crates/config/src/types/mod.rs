//! Configuration type definitions for rmfake.
//!
//! Responsibilities:
//! - Define the immutable `RuntimeConfig` record and its `SecretKey`.
//! - Define pass-through settings for the SMTP and handwriting-recognition collaborators.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//!
//! Invariants:
//! - All secret types use `secrecy` wrappers to prevent accidental logging.

mod collaborators;
mod runtime;
mod secret;

pub use collaborators::{HwrCredentials, SmtpSettings};
pub use runtime::RuntimeConfig;
pub use secret::{KeyOrigin, SecretKey};
