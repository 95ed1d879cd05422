//! Settings handed through to external collaborators.
//!
//! Responsibilities:
//! - Read the SMTP and handwriting-recognition variables from an `EnvSource`.
//! - Keep secret values behind `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Interpreting the values (TLS flags, addresses); the collaborators own that.
//! - Sending mail or calling the recognition API.
//!
//! Invariants:
//! - Values are passed on verbatim; empty values are treated as unset.

use secrecy::SecretString;

use crate::constants::{
    ENV_HWR_APPLICATION_KEY, ENV_HWR_HMAC, ENV_SMTP_FROM, ENV_SMTP_HELO, ENV_SMTP_INSECURE_TLS,
    ENV_SMTP_PASSWORD, ENV_SMTP_SERVER, ENV_SMTP_USERNAME,
};
use crate::loader::{EnvSource, non_empty_var};

/// Mail delivery settings.
#[derive(Debug, Clone, Default)]
pub struct SmtpSettings {
    pub server: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub helo: Option<String>,
    /// Raw value of `RM_SMTP_INSECURE_TLS`.
    pub insecure_tls: Option<String>,
    pub from: Option<String>,
}

impl SmtpSettings {
    pub fn from_source(source: &impl EnvSource) -> Self {
        Self {
            server: non_empty_var(source, ENV_SMTP_SERVER),
            username: non_empty_var(source, ENV_SMTP_USERNAME),
            password: non_empty_var(source, ENV_SMTP_PASSWORD)
                .map(|p| SecretString::new(p.into())),
            helo: non_empty_var(source, ENV_SMTP_HELO),
            insecure_tls: non_empty_var(source, ENV_SMTP_INSECURE_TLS),
            from: non_empty_var(source, ENV_SMTP_FROM),
        }
    }

    /// Mail delivery is possible only when a server is set.
    pub fn is_configured(&self) -> bool {
        self.server.is_some()
    }
}

/// Handwriting recognition API credentials.
#[derive(Debug, Clone, Default)]
pub struct HwrCredentials {
    pub application_key: Option<String>,
    pub hmac: Option<SecretString>,
}

impl HwrCredentials {
    pub fn from_source(source: &impl EnvSource) -> Self {
        Self {
            application_key: non_empty_var(source, ENV_HWR_APPLICATION_KEY),
            hmac: non_empty_var(source, ENV_HWR_HMAC).map(|h| SecretString::new(h.into())),
        }
    }

    /// Both the application key and the HMAC key are required to sign requests.
    pub fn is_configured(&self) -> bool {
        self.application_key.is_some() && self.hmac.is_some()
    }
}
