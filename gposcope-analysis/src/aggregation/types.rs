//! Aggregated match records.

use serde::{Deserialize, Serialize};

use crate::scopes::ScopeRecord;

/// One (matching policy, link) pair, or the single sentinel record of a
/// matching policy with zero links.
///
/// Built fresh per analysis run and never mutated; security-filtering
/// principals and the WMI filter name are per-policy data copied into every
/// record of that policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub policy_id: String,
    pub policy_name: String,
    pub scope: ScopeRecord,
    /// Ordered principal names with Apply permission.
    pub security_filtering_apply: Vec<String>,
    pub wmi_filter_name: Option<String>,
}

impl MatchRecord {
    /// True for the sentinel record of an unlinked policy.
    pub fn is_unlinked(&self) -> bool {
        self.scope.is_unlinked()
    }
}
