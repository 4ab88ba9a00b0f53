//! Error types for mf-core

use thiserror::Error;

/// Core error type for migfix
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: Failed to enumerate the migrations directory
    #[error("[E004] Failed to list '{path}': {source}")]
    ReadDir {
        path: String,
        source: std::io::Error,
    },

    /// E005: Failed to read a migration file
    #[error("[E005] Failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// E006: Failed to write a migration file back
    #[error("[E006] Failed to write '{path}': {source}")]
    WriteFile {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
