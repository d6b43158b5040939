//! DirectoryProvider trait: the directory-service collaborator.
//!
//! The engine only consumes already-materialized query results; connectivity,
//! authentication, and retries live behind this boundary. Implementations
//! return typed errors, which the engine surfaces without retrying.

use serde::{Deserialize, Serialize};

use crate::errors::DirectoryError;
use crate::types::policy::PolicyRef;

/// A hierarchy container that references a policy through its link attribute.
///
/// `raw_link_attribute` is the container's full link attribute text: an
/// ordered queue of `[<reference>;<options>]` entries covering every policy
/// linked to that container, not just the queried one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedContainer {
    /// Raw link attribute text as stored on the container.
    pub raw_link_attribute: String,
    /// Hierarchical path of the container (unique key within a domain).
    pub container_path: String,
    /// Directory class of the container, e.g. `organizationalUnit`.
    pub container_class: String,
}

/// Directory-service queries the engine depends on.
pub trait DirectoryProvider: Send + Sync {
    /// Every container (domain subtree and site registry) whose link
    /// attribute references the given policy.
    fn linked_containers(&self, policy: &PolicyRef)
        -> Result<Vec<LinkedContainer>, DirectoryError>;

    /// Ordered principal display names with Apply permission on the policy.
    fn security_filtering_apply(&self, policy: &PolicyRef)
        -> Result<Vec<String>, DirectoryError>;

    /// Display name of the WMI filter attached to the policy, if any.
    fn wmi_filter_name(&self, policy: &PolicyRef)
        -> Result<Option<String>, DirectoryError>;

    /// Display name of the domain, used to label domain-level scopes.
    fn domain_display_name(&self) -> String;
}
