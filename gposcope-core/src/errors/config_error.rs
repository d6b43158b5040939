//! Configuration errors.

use super::error_code::{self, GposcopeErrorCode};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl GposcopeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
