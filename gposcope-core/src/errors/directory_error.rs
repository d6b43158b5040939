//! Directory collaborator errors.

use super::error_code::{self, GposcopeErrorCode};

/// Typed failures surfaced by the directory collaborator.
///
/// The engine never retries these; connectivity and retry policy belong to
/// the collaborator side of the boundary.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Directory query failed: {0}")]
    QueryFailed(String),

    #[error("Access denied reading {attribute} on {dn}")]
    AccessDenied { dn: String, attribute: String },

    #[error("Directory operation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl GposcopeErrorCode for DirectoryError {
    fn error_code(&self) -> &'static str {
        error_code::DIRECTORY_ERROR
    }
}
