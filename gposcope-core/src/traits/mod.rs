//! Collaborator interfaces consumed by the engine.
//!
//! Every external dependency (directory queries, content search) is an
//! explicit object passed into the engine's constructors, never a
//! process-wide singleton.

pub mod cancellation;
pub mod content_match;
pub mod directory;

pub use cancellation::{Cancellable, CancellationToken};
pub use content_match::ContentMatcher;
pub use directory::{DirectoryProvider, LinkedContainer};
