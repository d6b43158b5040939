//! Scope classification and resolution.

pub mod dn;
pub mod resolver;
pub mod types;

pub use resolver::ScopeResolver;
pub use types::{ScopeRecord, ScopeType};
