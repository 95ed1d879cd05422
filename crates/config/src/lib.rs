//! Runtime configuration bootstrap for rmfake.
//!
//! This crate resolves the process-wide `RuntimeConfig` from environment
//! variables, applies defaults, derives dependent paths, ensures the trash
//! directory exists, and provisions the session signing secret.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ConfigSchema, ConfigWarning, EnvSource, LoadOutcome, OsPlatform,
    Platform, ProcessEnv, Setting, env_var_or_none, non_empty_var, non_empty_var_os,
};
pub use types::{HwrCredentials, KeyOrigin, RuntimeConfig, SecretKey, SmtpSettings};

#[cfg(test)]
pub(crate) mod test_util {
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    use crate::Platform;

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Deterministic platform for loader tests.
    #[derive(Debug, Clone)]
    pub struct FakePlatform {
        pub cwd: Option<PathBuf>,
        pub hostname: Option<String>,
        pub random_byte: Option<u8>,
    }

    impl FakePlatform {
        pub fn new(cwd: impl Into<PathBuf>) -> Self {
            Self {
                cwd: Some(cwd.into()),
                hostname: Some("host1".to_string()),
                random_byte: Some(0xab),
            }
        }

        pub fn without_hostname(mut self) -> Self {
            self.hostname = None;
            self
        }

        pub fn without_random(mut self) -> Self {
            self.random_byte = None;
            self
        }

        pub fn without_cwd(mut self) -> Self {
            self.cwd = None;
            self
        }
    }

    impl Platform for FakePlatform {
        fn current_dir(&self) -> io::Result<PathBuf> {
            self.cwd
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cwd was removed"))
        }

        fn hostname(&self) -> io::Result<String> {
            self.hostname
                .clone()
                .ok_or_else(|| io::Error::other("uname failed"))
        }

        fn fill_random(&self, buf: &mut [u8]) -> io::Result<()> {
            match self.random_byte {
                Some(byte) => {
                    buf.fill(byte);
                    Ok(())
                }
                None => Err(io::Error::other("entropy source unavailable")),
            }
        }
    }
}
