//! Host facilities the loader depends on.
//!
//! Responsibilities:
//! - Define the `Platform` capability: working directory, hostname, secure random bytes.
//! - Provide `OsPlatform`, backed by `std::env`, the `hostname` crate, and `getrandom`.
//!
//! Does NOT handle:
//! - Directory creation (done directly on the filesystem by the builder).
//!
//! Invariants:
//! - `fill_random` either fills the whole buffer from a CSPRNG or returns an error.

use std::io;
use std::path::PathBuf;

/// Host facilities used while resolving configuration.
pub trait Platform {
    /// The process working directory, used to absolutize the default data directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// The local hostname, used to synthesize the storage URL.
    fn hostname(&self) -> io::Result<String>;

    /// Fill `buf` with cryptographically secure random bytes.
    fn fill_random(&self, buf: &mut [u8]) -> io::Result<()>;
}

/// The real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPlatform;

impl Platform for OsPlatform {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn hostname(&self) -> io::Result<String> {
        hostname::get()?.into_string().map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("hostname is not valid UTF-8: {}", raw.to_string_lossy()),
            )
        })
    }

    fn fill_random(&self, buf: &mut [u8]) -> io::Result<()> {
        getrandom::fill(buf).map_err(io::Error::from)
    }
}
