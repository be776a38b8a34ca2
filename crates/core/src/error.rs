//! Core error types for FPAT operations.
//!
//! These cover the ambient failures (configuration, output, lookups).
//! Domain failures travel on the failure track of [`crate::Outcome`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for FPAT operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("TOML parse error in '{path}': {reason}")]
    ConfigParseFailed { path: PathBuf, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Catalogue errors
    #[error("unknown example '{name}' (try `fpat list`)")]
    UnknownExample { name: String },

    #[error("failed to write example output: {0}")]
    Output(#[from] std::io::Error),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an unknown example error.
    pub fn unknown_example(name: impl Into<String>) -> Self {
        Self::UnknownExample { name: name.into() }
    }
}
