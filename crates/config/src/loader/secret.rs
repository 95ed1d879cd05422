//! Signing secret provisioning.
//!
//! Responsibilities:
//! - Decode a hex-encoded secret supplied by the operator.
//! - Generate a fresh random secret when none is usable.
//!
//! Invariants:
//! - A non-empty decode result is used as-is; its length is the operator's responsibility.
//! - Decode failure, an empty result, or an unset variable all take the generated path.
//! - Random source failure is fatal; there is no fallback for key material.

use secrecy::SecretString;

use super::error::ConfigError;
use super::platform::Platform;
use super::warning::ConfigWarning;
use crate::types::{KeyOrigin, SecretKey};

/// Resolve the signing secret from its raw hex value.
///
/// Returns the key, plus a warning when the key had to be generated.
pub(crate) fn resolve_secret_key(
    raw_hex: Option<&str>,
    var: &'static str,
    generated_len: usize,
    platform: &dyn Platform,
) -> Result<(SecretKey, Option<ConfigWarning>), ConfigError> {
    let decoded = raw_hex
        .and_then(|raw| hex::decode(raw).ok())
        .filter(|bytes| !bytes.is_empty());
    if let Some(bytes) = decoded {
        return Ok((SecretKey::new(bytes, KeyOrigin::Environment), None));
    }

    let mut bytes = vec![0u8; generated_len];
    platform
        .fill_random(&mut bytes)
        .map_err(|source| ConfigError::RandomSource {
            var: var.to_string(),
            source,
        })?;

    let warning = ConfigWarning::EphemeralSecretKey {
        var,
        suggestion: SecretString::new(hex::encode_upper(&bytes).into()),
    };

    Ok((SecretKey::new(bytes, KeyOrigin::Generated), Some(warning)))
}
