//! Same-scope and hierarchy overlap detection.

use gposcope_core::types::collections::FxHashMap;

use crate::aggregation::MatchRecord;
use crate::scopes::{dn, ScopeType};
use super::types::{HierarchyOverlap, OverlapReport, SameScopeOverlap};

/// Detect structural redundancy in a finalized match-record sequence.
pub fn analyze(records: &[MatchRecord]) -> OverlapReport {
    OverlapReport {
        same_scope: same_scope_overlaps(records),
        hierarchy: hierarchy_overlaps(records),
    }
}

/// Partition non-sentinel records by `(scope_type, dn)`; partitions with ≥2
/// records are overlap groups.
///
/// Groups are sorted by key so a snapshot always yields the same sequence;
/// records inside a group keep input order.
fn same_scope_overlaps(records: &[MatchRecord]) -> Vec<SameScopeOverlap> {
    let mut groups: FxHashMap<(ScopeType, String), Vec<&MatchRecord>> = FxHashMap::default();
    for record in records.iter().filter(|r| !r.is_unlinked()) {
        groups
            .entry((record.scope.scope_type.clone(), dn::normalize(&record.scope.scope_dn)))
            .or_default()
            .push(record);
    }

    let mut overlaps: Vec<SameScopeOverlap> = groups
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|((scope_type, _), members)| SameScopeOverlap {
            scope_type,
            scope_dn: members[0].scope.scope_dn.clone(),
            records: members.into_iter().cloned().collect(),
        })
        .collect();
    overlaps.sort_by(|a, b| {
        (&a.scope_type, dn::normalize(&a.scope_dn)).cmp(&(&b.scope_type, dn::normalize(&b.scope_dn)))
    });
    overlaps
}

/// Every ordered (ancestor, descendant-OU) pair among domain and OU records.
///
/// Containment is exact DN suffix containment at a component boundary, never
/// a substring match: records sharing only the domain tail do not pair.
/// O(n²) over matching records, which stay small (one setting's matches).
fn hierarchy_overlaps(records: &[MatchRecord]) -> Vec<HierarchyOverlap> {
    let eligible: Vec<&MatchRecord> = records
        .iter()
        .filter(|r| {
            !r.is_unlinked()
                && matches!(
                    r.scope.scope_type,
                    ScopeType::Domain | ScopeType::OrganizationalUnit
                )
        })
        .collect();

    let mut overlaps = Vec::new();
    for parent in &eligible {
        for child in &eligible {
            if child.scope.scope_type != ScopeType::OrganizationalUnit {
                continue;
            }
            if dn::equals(&parent.scope.scope_dn, &child.scope.scope_dn) {
                continue;
            }
            if dn::is_descendant_of(&child.scope.scope_dn, &parent.scope.scope_dn) {
                overlaps.push(HierarchyOverlap {
                    parent: (*parent).clone(),
                    child: (*child).clone(),
                });
            }
        }
    }
    overlaps
}
