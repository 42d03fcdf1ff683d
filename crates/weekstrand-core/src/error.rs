//! Core error types for weekstrand-core.
//!
//! The strand conversion itself never fails: degenerate geometry yields no
//! output and malformed events are logged and skipped. These errors cover
//! everything around it (configuration files, parsed input, color keys).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekstrand-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Color key could not be parsed
    #[error("Invalid color '{0}': expected #RRGGBB, #AARRGGBB, 0x prefixed hex or decimal")]
    InvalidColor(String),

    /// Event ends before it starts
    #[error("Event starts on day {start_day} but ends on day {end_day}")]
    EventOrder { start_day: i32, end_day: i32 },

    /// Minute of day outside 0..1440
    #[error("Minute {minute} for '{field}' is outside 0..1440")]
    MinuteOutOfRange { field: String, minute: u32 },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
