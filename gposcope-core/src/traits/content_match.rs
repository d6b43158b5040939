//! ContentMatcher trait: the content-search collaborator.

use crate::errors::DirectoryError;
use crate::types::policy::PolicyRef;

/// Content/text search over a policy's exported representation.
///
/// The engine treats the pattern as opaque; what "matching" means (plain
/// substring, regex, setting path) is the collaborator's contract.
pub trait ContentMatcher: Send + Sync {
    fn has_content_match(&self, policy: &PolicyRef, pattern: &str)
        -> Result<bool, DirectoryError>;
}
