//! Audit configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for an audit run.
///
/// Loaded from `gposcope.toml`; unknown keys are silently ignored
/// (forward-compatible). Every knob has a compiled default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Baseline candidates surfaced by the pipeline view. Default: 3.
    pub top_candidates: Option<usize>,
    /// Fan out per-policy scope resolution across threads. Default: false.
    pub parallel: Option<bool>,
    /// Additional principal names treated as broad-apply, on top of the
    /// built-in vocabulary. Extends, never replaces.
    #[serde(default)]
    pub extra_broad_principals: Vec<String>,
}

impl AuditConfig {
    /// Returns the effective candidate count, defaulting to 3.
    pub fn effective_top_candidates(&self) -> usize {
        self.top_candidates.unwrap_or(3)
    }

    /// Returns whether parallel resolution is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_candidates == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "top_candidates".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
