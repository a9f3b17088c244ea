// crates/qualifier-core/src/config.rs - Configuration System
//
// Configuration schema and loading for the qualifier tool.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--verbose, --json)
// 2. Environment variables (QUALIFIER_MAX_QUOTE_LENGTH, etc.)
// 3. Config file passed with --config
// 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::variant::MAX_QUOTE_LENGTH;

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every section has serde defaults so a partial file (or an empty one) is
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualifierConfig {
    /// Length limits applied by the dispatcher and the uwu guard
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Output formatting options
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging defaults
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum characters for raw quotes and for rendered pig latin
    ///
    /// Also caps the uwu stutter stage before it falls back to substitution only.
    #[serde(default = "default_max_quote_length")]
    pub max_quote_length: usize,
}

/// Output formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Marker printed before each listed quote
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Default output format: "human" or "json"
    #[serde(default = "default_output_format")]
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from defaults, an optional file, and the environment
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with the config file (if given)
    /// 3. Override with environment variables
    ///
    /// An explicitly requested file that does not exist is an error.
    pub fn load_config(config_path: Option<&Path>) -> ConfigResult<QualifierConfig> {
        let mut config = match config_path {
            Some(path) => Self::load_file(path)?,
            None => QualifierConfig::default(),
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> ConfigResult<QualifierConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: origin.to_string(),
            error: e.to_string(),
        })
    }

    /// Render a configuration as TOML
    pub fn to_toml_string(config: &QualifierConfig) -> ConfigResult<String> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Generate a default configuration file with comments
    pub fn generate_default_config() -> String {
        r#"# Qualifier Configuration File
#
# Lines starting with # are comments and are ignored.

[limits]
# Maximum characters for a raw quote and for a pig latin result.
# Also the point at which uwu stops adding "u-u" stutters.
max_quote_length = 50

[output]
# Marker printed before each quote by `quote list`
bullet = "-"

# Output format: "human" or "json"
format = "human"

[logging]
# Level used when RUST_LOG is not set: error, warn, info, debug, trace
level = "warn"
"#
        .to_string()
    }

    fn load_file(path: &Path) -> ConfigResult<QualifierConfig> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Apply environment variable overrides
    ///
    /// - QUALIFIER_MAX_QUOTE_LENGTH -> limits.max_quote_length
    /// - QUALIFIER_OUTPUT_FORMAT -> output.format
    /// - QUALIFIER_LOG_LEVEL -> logging.level
    fn apply_env_overrides(config: &mut QualifierConfig) -> ConfigResult<()> {
        use std::env;

        if let Ok(max) = env::var("QUALIFIER_MAX_QUOTE_LENGTH") {
            config.limits.max_quote_length = max.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "QUALIFIER_MAX_QUOTE_LENGTH must be a positive integer, got '{}'",
                    max
                ))
            })?;
        }

        if let Ok(format) = env::var("QUALIFIER_OUTPUT_FORMAT") {
            config.output.format = format;
        }

        if let Ok(level) = env::var("QUALIFIER_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }

    /// Validate the final configuration for consistency and correctness
    pub fn validate_config(config: &QualifierConfig) -> ConfigResult<()> {
        if config.limits.max_quote_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_quote_length must be greater than zero".to_string(),
            ));
        }

        if config.output.bullet.is_empty() {
            return Err(ConfigError::ValidationError(
                "Output bullet cannot be empty".to_string(),
            ));
        }

        match config.output.format.as_str() {
            "human" | "json" => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid output format '{}'. Must be one of: human, json",
                    config.output.format
                )));
            }
        }

        match config.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level '{}'. Must be one of: error, warn, info, debug, trace",
                    config.logging.level
                )));
            }
        }

        Ok(())
    }
}

fn default_max_quote_length() -> usize {
    MAX_QUOTE_LENGTH
}
fn default_bullet() -> String {
    "-".to_string()
}
fn default_output_format() -> String {
    "human".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_quote_length: default_max_quote_length(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            bullet: default_bullet(),
            format: default_output_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
