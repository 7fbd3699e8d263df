//! Centralized path definitions for bunkcalc
//!
//! bunkcalc keeps no data of its own; the only file it reads is the user's
//! configuration.
//!
//! ```text
//! $XDG_CONFIG_HOME/bunkcalc/      # ~/.config/bunkcalc on Linux
//! └── config.toml                 # Percentage options, server defaults
//! ```
//!
//! Setting `BUNKCALC_CONFIG` points at a different file entirely.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BUNKCALC_CONFIG";

/// Directory name under the platform config directory
const GLOBAL_DIR: &str = "bunkcalc";

/// Config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global config directory.
///
/// Falls back to `./.bunkcalc` when the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".bunkcalc"), |dir| dir.join(GLOBAL_DIR))
}

/// Get the config file path, honouring `BUNKCALC_CONFIG`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
