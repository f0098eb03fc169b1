//! Neo Invoke Configuration Module
//!
//! This module provides the settings that shape an invocation: the fee
//! constants used when pricing a dry run and the logger setup of the
//! command-line front end. Everything has a default, so a missing file is
//! not an error.

use neo_invoke_core::Fixed8;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Fee charged when an invocation pays no GAS (0.001).
pub const DEFAULT_MIN_NETWORK_FEE: Fixed8 = Fixed8::from_raw(100_000);

/// GAS every invocation may consume for free (10).
pub const DEFAULT_FREE_GAS_ALLOWANCE: Fixed8 = Fixed8::from_units(10);

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is syntactically valid but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fee constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSettings {
    /// Network fee applied when the draft carries no GAS.
    pub min_network_fee: Fixed8,
    /// GAS consumed free of charge by every invocation.
    pub free_gas_allowance: Fixed8,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            min_network_fee: DEFAULT_MIN_NETWORK_FEE,
            free_gas_allowance: DEFAULT_FREE_GAS_ALLOWANCE,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!("unknown log format '{other}'"))),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log level or `EnvFilter` directive
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Complete invoker configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvokerConfig {
    /// Fee constants
    pub fees: FeeSettings,
    /// Logger configuration
    pub logger: LoggerConfig,
}

impl InvokerConfig {
    /// Loads configuration from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: InvokerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Checks that fee constants are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("fees.min_network_fee", self.fees.min_network_fee),
            ("fees.free_gas_allowance", self.fees.free_gas_allowance),
        ] {
            if value.is_negative() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.logger.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logger.level must not be empty".into()));
        }

        Ok(())
    }
}
