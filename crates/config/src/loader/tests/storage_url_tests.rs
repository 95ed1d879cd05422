//! Storage URL tests.
//!
//! Responsibilities:
//! - Test that an explicit storage URL is used verbatim.
//! - Test synthesis from hostname and port, including the placeholder fallback.

use tempfile::TempDir;

use super::vars;
use crate::loader::builder::ConfigLoader;
use crate::loader::warning::ConfigWarning;
use crate::test_util::FakePlatform;

#[test]
fn test_storage_url_override_is_verbatim() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = ConfigLoader::new()
        .with_platform(FakePlatform::new(temp_dir.path()).without_hostname())
        .from_source(&vars(&[
            ("STORAGE_URL", "https://cloud.example.com/storage/ "),
            ("PORT", "9999"),
            ("JWT_SECRET_KEY", "abcd"),
        ]))
        .build()
        .unwrap();

    assert_eq!(
        outcome.config.storage_url(),
        "https://cloud.example.com/storage/ "
    );
    // Hostname is never consulted, so no warning
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_storage_url_synthesized_from_hostname_and_port() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = ConfigLoader::new()
        .with_platform(FakePlatform::new(temp_dir.path()))
        .from_source(&vars(&[("PORT", "3000")]))
        .build()
        .unwrap();

    assert_eq!(outcome.config.storage_url(), "http://host1:3000");
}

#[test]
fn test_empty_storage_url_is_synthesized() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = ConfigLoader::new()
        .with_platform(FakePlatform::new(temp_dir.path()))
        .from_source(&vars(&[("STORAGE_URL", ""), ("PORT", "8080")]))
        .build()
        .unwrap();

    assert_eq!(outcome.config.storage_url(), "http://host1:8080");
}

#[test]
fn test_hostname_failure_uses_placeholder_and_warns() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = ConfigLoader::new()
        .with_platform(FakePlatform::new(temp_dir.path()).without_hostname())
        .from_source(&vars(&[("JWT_SECRET_KEY", "0102")]))
        .build()
        .unwrap();

    assert_eq!(outcome.config.storage_url(), "http://local.appspot.com:3000");
    assert_eq!(outcome.warnings.len(), 1);
    match &outcome.warnings[0] {
        ConfigWarning::HostnameUnavailable {
            var,
            placeholder,
            reason,
        } => {
            assert_eq!(*var, "STORAGE_URL");
            assert_eq!(*placeholder, "local.appspot.com");
            assert!(reason.contains("uname failed"));
        }
        other => panic!("expected HostnameUnavailable, got {:?}", other),
    }
}

#[test]
fn test_custom_placeholder_host_from_schema() {
    let temp_dir = TempDir::new().unwrap();
    let schema = crate::ConfigSchema {
        placeholder_host: "rmfake.invalid",
        ..Default::default()
    };

    let outcome = ConfigLoader::new()
        .with_schema(schema)
        .with_platform(FakePlatform::new(temp_dir.path()).without_hostname())
        .with_port("80")
        .build()
        .unwrap();

    assert_eq!(outcome.config.storage_url(), "http://rmfake.invalid:80");
}
