//! Global configuration management
//!
//! Holds the offered percentage options and server defaults.
//! Config is stored at `~/.config/bunkcalc/config.toml` (XDG standard)
//! unless `BUNKCALC_CONFIG` says otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ValidationError;
use crate::core::models::RequiredPercentage;
use crate::core::services::ensure_offered;
use crate::paths;

/// Errors from reading, writing or checking the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config I/O error at {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Values parse but make no sense together
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Global bunkcalc configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Calculator settings
    #[serde(default)]
    pub calculator: CalculatorConfig,
    /// Form server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Percentages offered in the form and accepted on the command line
    #[serde(default = "default_options")]
    pub options: Vec<u8>,
    /// Percentage used when none is given
    #[serde(default = "default_required")]
    pub default_required: u8,
}

fn default_options() -> Vec<u8> {
    vec![75, 80, 85, 90]
}

const fn default_required() -> u8 {
    75
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            options: default_options(),
            default_required: default_required(),
        }
    }
}

/// Form server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unusable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            },
        }
    }

    /// Load and check config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// Check that options and default are consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let calc = &self.calculator;
        if calc.options.is_empty() {
            return Err(ConfigError::Invalid("calculator.options cannot be empty".to_string()));
        }
        if let Some(bad) = calc.options.iter().find(|&&o| o == 0 || o > 100) {
            return Err(ConfigError::Invalid(format!(
                "calculator.options must be between 1 and 100, got {bad}"
            )));
        }
        if !calc.options.contains(&calc.default_required) {
            return Err(ConfigError::Invalid(format!(
                "calculator.default_required ({}) is not one of calculator.options",
                calc.default_required
            )));
        }
        Ok(())
    }

    /// The default percentage as a domain value
    pub fn default_required(&self) -> Result<RequiredPercentage, ValidationError> {
        RequiredPercentage::new(i64::from(self.calculator.default_required))
    }

    /// Resolve an optional user-supplied percentage against the options
    pub fn resolve_required(
        &self,
        requested: Option<RequiredPercentage>,
    ) -> Result<RequiredPercentage, ValidationError> {
        let required = match requested {
            Some(r) => r,
            None => self.default_required()?,
        };
        ensure_offered(required, &self.calculator.options)
    }
}
