//! Row types: one struct per exported table, every field a primitive or
//! string.

use serde::{Deserialize, Serialize};

use crate::aggregation::MatchRecord;
use crate::overlap::{HierarchyOverlap, SameScopeOverlap};
use crate::scoring::ScoreBreakdown;

/// Tri-state link flag rendered for tabular output.
fn link_state(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "true",
        Some(false) => "false",
        None => "unknown",
    }
}

/// One row per match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRow {
    pub policy_id: String,
    pub policy_name: String,
    pub scope_type: String,
    pub scope_name: String,
    pub scope_dn: String,
    pub link_enabled: String,
    pub link_enforced: String,
    /// Principals joined with `"; "`.
    pub security_filtering_apply: String,
    pub wmi_filter_name: String,
}

impl From<&MatchRecord> for MatchRow {
    fn from(record: &MatchRecord) -> Self {
        Self {
            policy_id: record.policy_id.clone(),
            policy_name: record.policy_name.clone(),
            scope_type: record.scope.scope_type.to_string(),
            scope_name: record.scope.scope_name.clone(),
            scope_dn: record.scope.scope_dn.clone(),
            link_enabled: link_state(record.scope.link_enabled).to_string(),
            link_enforced: link_state(record.scope.link_enforced).to_string(),
            security_filtering_apply: record.security_filtering_apply.join("; "),
            wmi_filter_name: record.wmi_filter_name.clone().unwrap_or_default(),
        }
    }
}

/// One row per same-scope overlap group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameScopeRow {
    pub scope_type: String,
    pub scope_dn: String,
    pub policy_count: usize,
    /// Member policy names joined with `"; "`, in group order.
    pub policy_names: String,
}

impl From<&SameScopeOverlap> for SameScopeRow {
    fn from(group: &SameScopeOverlap) -> Self {
        Self {
            scope_type: group.scope_type.to_string(),
            scope_dn: group.scope_dn.clone(),
            policy_count: group.records.len(),
            policy_names: group
                .records
                .iter()
                .map(|r| r.policy_name.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// One row per hierarchy overlap pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyRow {
    pub parent_policy_name: String,
    pub parent_scope_type: String,
    pub parent_scope_dn: String,
    pub child_policy_name: String,
    pub child_scope_dn: String,
}

impl From<&HierarchyOverlap> for HierarchyRow {
    fn from(pair: &HierarchyOverlap) -> Self {
        Self {
            parent_policy_name: pair.parent.policy_name.clone(),
            parent_scope_type: pair.parent.scope.scope_type.to_string(),
            parent_scope_dn: pair.parent.scope.scope_dn.clone(),
            child_policy_name: pair.child.policy_name.clone(),
            child_scope_dn: pair.child.scope.scope_dn.clone(),
        }
    }
}

/// One row per ranked candidate, rank starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub rank: usize,
    pub policy_id: String,
    pub policy_name: String,
    pub total_score: i32,
    pub scope_score: i32,
    pub broad_apply_score: i32,
    pub domain_link_score: i32,
    pub enforced_score: i32,
    pub linked_scope_count: usize,
    pub has_domain_link: bool,
    pub looks_broad_apply: bool,
    pub enforced_link_count: usize,
}

/// Flatten match records in sequence order.
pub fn match_rows(records: &[MatchRecord]) -> Vec<MatchRow> {
    records.iter().map(MatchRow::from).collect()
}

/// Flatten same-scope overlap groups in sequence order.
pub fn same_scope_rows(groups: &[SameScopeOverlap]) -> Vec<SameScopeRow> {
    groups.iter().map(SameScopeRow::from).collect()
}

/// Flatten hierarchy overlap pairs in sequence order.
pub fn hierarchy_rows(pairs: &[HierarchyOverlap]) -> Vec<HierarchyRow> {
    pairs.iter().map(HierarchyRow::from).collect()
}

/// Flatten ranked scores, assigning 1-based ranks in sequence order.
pub fn score_rows(scores: &[ScoreBreakdown]) -> Vec<ScoreRow> {
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| ScoreRow {
            rank: i + 1,
            policy_id: s.policy_id.clone(),
            policy_name: s.policy_name.clone(),
            total_score: s.total_score,
            scope_score: s.scope_score,
            broad_apply_score: s.broad_apply_score,
            domain_link_score: s.domain_link_score,
            enforced_score: s.enforced_score,
            linked_scope_count: s.linked_scope_count,
            has_domain_link: s.has_domain_link,
            looks_broad_apply: s.looks_broad_apply,
            enforced_link_count: s.enforced_link_count,
        })
        .collect()
}
