//! Config environment variable tests
//!
//! These tests verify that Config::from_env() reads and applies environment
//! variable overrides. Config::from_env() also loads a .env file via dotenvy,
//! so these tests set and clear the variables they depend on.
//!
//! Tests use #[serial] to prevent race conditions with shared env vars.

use prism_lens::config::{Config, LogFormat, DEFAULT_STALE_AFTER_DAYS};
use serial_test::serial;
use std::env;
use std::path::Path;

#[test]
#[serial]
fn test_config_defaults() {
    env::remove_var("CATALOG_PATH");
    env::remove_var("SOURCE_STALE_AFTER_DAYS");

    let config = Config::from_env().unwrap();
    assert!(config.catalog.path.is_none());
    assert_eq!(config.scoring.stale_after_days, DEFAULT_STALE_AFTER_DAYS);
}

#[test]
#[serial]
fn test_config_from_env_json_log_format() {
    env::set_var("LOG_FORMAT", "JSON");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    // Restore default
    env::set_var("LOG_FORMAT", "pretty");
}

#[test]
#[serial]
fn test_config_unknown_log_format_is_pretty() {
    env::set_var("LOG_FORMAT", "xml");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Pretty);

    env::set_var("LOG_FORMAT", "pretty");
}

#[test]
#[serial]
fn test_config_from_env_log_level() {
    env::set_var("LOG_LEVEL", "debug");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.level, "debug");

    // Restore default
    env::set_var("LOG_LEVEL", "info");
}

#[test]
#[serial]
fn test_config_from_env_catalog_path() {
    env::set_var("CATALOG_PATH", "/etc/prism/catalog.json");

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(Path::new("/etc/prism/catalog.json"))
    );

    env::remove_var("CATALOG_PATH");
}

#[test]
#[serial]
fn test_config_blank_catalog_path_is_unset() {
    env::set_var("CATALOG_PATH", "  ");

    let config = Config::from_env().unwrap();
    assert!(config.catalog.path.is_none());

    env::remove_var("CATALOG_PATH");
}

#[test]
#[serial]
fn test_config_from_env_stale_days() {
    env::set_var("SOURCE_STALE_AFTER_DAYS", "90");

    let config = Config::from_env().unwrap();
    assert_eq!(config.scoring.stale_after_days, 90);

    env::remove_var("SOURCE_STALE_AFTER_DAYS");
}

#[test]
#[serial]
fn test_config_invalid_stale_days_is_error() {
    for raw in ["soon", "0", "-3"] {
        env::set_var("SOURCE_STALE_AFTER_DAYS", raw);
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SOURCE_STALE_AFTER_DAYS"));
    }

    env::remove_var("SOURCE_STALE_AFTER_DAYS");
}
