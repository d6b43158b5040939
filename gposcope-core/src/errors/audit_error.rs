//! Audit pipeline errors.

use super::directory_error::DirectoryError;
use super::error_code::{self, GposcopeErrorCode};

/// Errors that can abort an audit run.
///
/// Soft failures (malformed link options, unreadable security filtering) are
/// handled at their boundaries and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Audit run cancelled")]
    Cancelled,
}

impl GposcopeErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Directory(e) => e.error_code(),
            Self::Cancelled => error_code::AUDIT_ERROR,
        }
    }
}
