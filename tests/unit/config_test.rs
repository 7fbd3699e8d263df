//! Tests for global configuration management

use bunkcalc::config::{Config, ConfigError};
use bunkcalc::core::ValidationError;
use bunkcalc::paths::CONFIG_ENV;
use serial_test::serial;

use crate::common::{TestConfig, pct};

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_from_full_file() {
    let cfg = TestConfig::with_content(
        r#"
[calculator]
options = [60, 70, 80]
default_required = 70

[server]
host = "0.0.0.0"
port = 9090
"#,
    );
    let config = Config::load_from(&cfg.path()).unwrap();
    assert_eq!(config.calculator.options, vec![60, 70, 80]);
    assert_eq!(config.calculator.default_required, 70);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
}

#[test]
fn test_missing_sections_use_defaults() {
    let cfg = TestConfig::with_content("[server]\nport = 8123\n");
    let config = Config::load_from(&cfg.path()).unwrap();
    assert_eq!(config.calculator.options, vec![75, 80, 85, 90]);
    assert_eq!(config.server.port, 8123);
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
fn test_malformed_file_is_parse_error() {
    let cfg = TestConfig::with_content("[calculator\noptions = ");
    assert!(matches!(Config::load_from(&cfg.path()), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_inconsistent_file_is_invalid() {
    let cfg = TestConfig::with_content("[calculator]\noptions = [80]\ndefault_required = 75\n");
    assert!(matches!(Config::load_from(&cfg.path()), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let cfg = TestConfig::empty();
    assert!(matches!(Config::load_from(&cfg.path()), Err(ConfigError::Io { .. })));
}

// =============================================================================
// SAVING
// =============================================================================

#[test]
fn test_save_then_load() {
    let cfg = TestConfig::empty();
    let mut config = Config::default();
    config.server.port = 4321;
    config.save_to(&cfg.path()).unwrap();

    let loaded = Config::load_from(&cfg.path()).unwrap();
    assert_eq!(loaded, config);
}

// =============================================================================
// ENVIRONMENT OVERRIDE
// =============================================================================

#[test]
#[serial]
fn test_env_override_points_at_file() {
    let cfg = TestConfig::with_content("[calculator]\noptions = [50]\ndefault_required = 50\n");
    // SAFETY: serialized with other env-touching tests
    unsafe { std::env::set_var(CONFIG_ENV, cfg.path()) };

    assert_eq!(Config::config_path(), cfg.path());
    assert_eq!(Config::load().calculator.options, vec![50]);

    unsafe { std::env::remove_var(CONFIG_ENV) };
}

#[test]
#[serial]
fn test_load_falls_back_on_bad_file() {
    let cfg = TestConfig::with_content("not = [valid");
    // SAFETY: serialized with other env-touching tests
    unsafe { std::env::set_var(CONFIG_ENV, cfg.path()) };

    assert_eq!(Config::load(), Config::default());

    unsafe { std::env::remove_var(CONFIG_ENV) };
}

// =============================================================================
// PERCENTAGE RESOLUTION
// =============================================================================

#[test]
fn test_resolve_required_rejects_unoffered() {
    let err = Config::default().resolve_required(Some(pct(95))).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedPercentage { value: 95, .. }));
}
