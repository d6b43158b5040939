//! Scope resolution: policy → every container/site linking it.

use gposcope_core::traits::directory::DirectoryProvider;
use gposcope_core::types::policy::PolicyRef;
use gposcope_core::DirectoryError;

use crate::links::{attribute, decoder};
use super::dn;
use super::types::{ScopeRecord, ScopeType};

/// Resolves the full link scope of a policy against the directory
/// collaborator.
pub struct ScopeResolver<'a, P: DirectoryProvider> {
    provider: &'a P,
}

impl<'a, P: DirectoryProvider> ScopeResolver<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// One `ScopeRecord` per link referencing the policy.
    ///
    /// Returns an empty vector (not an error) when no links exist. Output is
    /// sorted by `(scope_type, scope_name)` so identical snapshots resolve to
    /// identical sequences regardless of directory result order.
    pub fn resolve(&self, policy: &PolicyRef) -> Result<Vec<ScopeRecord>, DirectoryError> {
        let containers = self.provider.linked_containers(policy)?;
        let mut records = Vec::with_capacity(containers.len());

        for container in containers {
            let scope_type = ScopeType::from_directory_class(&container.container_class);
            let scope_name = match scope_type {
                ScopeType::Domain => self.provider.domain_display_name(),
                ScopeType::Site => dn::leaf_name(&container.container_path).to_string(),
                _ => container.container_path.clone(),
            };
            let flags = attribute::link_options_for(&container.raw_link_attribute, &policy.id)
                .map(decoder::decode);

            records.push(ScopeRecord {
                scope_type,
                scope_name,
                scope_dn: container.container_path,
                link_enabled: flags.map(|f| f.enabled),
                link_enforced: flags.map(|f| f.enforced),
            });
        }

        records.sort_by(|a, b| {
            (&a.scope_type, &a.scope_name).cmp(&(&b.scope_type, &b.scope_name))
        });
        tracing::debug!(policy = %policy.id, scopes = records.len(), "resolved link scopes");
        Ok(records)
    }
}
