//! Core types, traits, errors, config, and tracing for the gposcope
//! policy-scope analysis engine.

pub mod config;
pub mod errors;
pub mod trace;
pub mod traits;
pub mod types;

pub use config::AuditConfig;
pub use errors::{AuditError, ConfigError, DirectoryError};
pub use traits::content_match::ContentMatcher;
pub use traits::directory::{DirectoryProvider, LinkedContainer};
pub use types::policy::PolicyRef;
