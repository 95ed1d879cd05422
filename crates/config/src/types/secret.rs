//! Signing secret for session tokens.
//!
//! Responsibilities:
//! - Hold the secret bytes behind `secrecy::SecretSlice` so they are zeroized on drop.
//! - Record whether the key was pinned via environment or generated for this run.
//!
//! Does NOT handle:
//! - Decoding or generating the key (see `loader::secret`).
//! - Signing or verifying tokens (external collaborator).
//!
//! Invariants:
//! - The byte sequence is never empty.
//! - `Debug` output never contains the key material.

use secrecy::{ExposeSecret, SecretSlice};

/// Where the signing secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// Decoded from the hex value of the secret key variable.
    Environment,
    /// Freshly generated from the OS random source. Changes on every restart.
    Generated,
}

/// Symmetric key material used to sign and verify session tokens.
#[derive(Debug)]
pub struct SecretKey {
    bytes: SecretSlice<u8>,
    origin: KeyOrigin,
}

impl SecretKey {
    pub(crate) fn new(bytes: Vec<u8>, origin: KeyOrigin) -> Self {
        debug_assert!(!bytes.is_empty(), "secret key must not be empty");
        Self {
            bytes: SecretSlice::from(bytes),
            origin,
        }
    }

    /// Borrow the raw key bytes.
    pub fn expose_secret(&self) -> &[u8] {
        self.bytes.expose_secret()
    }

    /// Number of key bytes.
    pub fn len(&self) -> usize {
        self.expose_secret().len()
    }

    /// The loader never produces an empty key.
    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }

    pub fn origin(&self) -> KeyOrigin {
        self.origin
    }

    /// True if the key was generated for this process and will not survive a restart.
    pub fn is_ephemeral(&self) -> bool {
        self.origin == KeyOrigin::Generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak_key_bytes() {
        let key = SecretKey::new(vec![0xde, 0xad, 0xbe, 0xef], KeyOrigin::Environment);
        let debug = format!("{:?}", key);

        assert!(!debug.to_lowercase().contains("dead"));
        assert!(!debug.contains("222"), "decimal byte values must not appear");
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_origin_drives_ephemeral_flag() {
        let pinned = SecretKey::new(vec![1, 2, 3], KeyOrigin::Environment);
        let generated = SecretKey::new(vec![4; 32], KeyOrigin::Generated);

        assert!(!pinned.is_ephemeral());
        assert!(generated.is_ephemeral());
        assert_eq!(pinned.len(), 3);
        assert_eq!(generated.expose_secret(), &[4u8; 32][..]);
    }
}
