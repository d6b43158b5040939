//! Overlap records.

use serde::{Deserialize, Serialize};

use crate::aggregation::MatchRecord;
use crate::scopes::ScopeType;

/// Two or more matching policies linked to the identical container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SameScopeOverlap {
    pub scope_type: ScopeType,
    /// DN as it appeared on the first grouped record.
    pub scope_dn: String,
    /// Members in input order, always ≥ 2.
    pub records: Vec<MatchRecord>,
}

/// A matching policy linked at an ancestor container paired with one linked
/// at a descendant organizational unit.
///
/// The pair is ordered: parent/child roles are asymmetric and each direction
/// is reported once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyOverlap {
    pub parent: MatchRecord,
    pub child: MatchRecord,
}

/// Output of overlap analysis. Both sequences are empty (not errors) when
/// nothing overlaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapReport {
    pub same_scope: Vec<SameScopeOverlap>,
    pub hierarchy: Vec<HierarchyOverlap>,
}

impl OverlapReport {
    pub fn is_empty(&self) -> bool {
        self.same_scope.is_empty() && self.hierarchy.is_empty()
    }
}
