//! rmfake server bootstrap.
//!
//! Responsibilities:
//! - Initialize logging from `LOGLEVEL`.
//! - Resolve the runtime configuration from the environment and report fallbacks.
//! - Resolve collaborator pass-through settings and report which are configured.
//!
//! Does NOT handle:
//! - Serving requests; the HTTP, SMTP and handwriting-recognition services are wired
//!   from the resolved configuration elsewhere.
//!
//! Invariants:
//! - This is the only place that terminates the process on a setup failure.
//! - Logging is initialized BEFORE the configuration is built so warnings are visible.

mod error;
mod logging;

use error::{ExitCode, ExitCodeExt};
use rmfake_config::{ConfigLoader, HwrCredentials, ProcessEnv, RuntimeConfig, SmtpSettings};

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {:#}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let outcome = match ConfigLoader::new().from_env().build() {
        Ok(outcome) => outcome,
        Err(e) => {
            let code = e.exit_code();
            eprintln!(
                "Failed to build configuration: {:#}",
                anyhow::Error::new(e)
            );
            std::process::exit(code.as_i32());
        }
    };

    outcome.log_warnings();
    let config = outcome.into_config();
    log_summary(&config);

    let smtp = SmtpSettings::from_source(&ProcessEnv);
    let hwr = HwrCredentials::from_source(&ProcessEnv);
    tracing::info!(
        smtp_configured = smtp.is_configured(),
        hwr_configured = hwr.is_configured(),
        "collaborator settings resolved"
    );

    std::process::exit(ExitCode::Success.as_i32());
}

fn log_summary(config: &RuntimeConfig) {
    tracing::info!(
        port = config.port(),
        storage_url = config.storage_url(),
        data_dir = %config.data_dir().display(),
        trash_dir = %config.trash_dir().display(),
        registration_open = config.registration_open(),
        secret_key_ephemeral = config.secret_key().is_ephemeral(),
        "runtime configuration loaded"
    );
}
