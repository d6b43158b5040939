//! Baseline candidate ranking.

use gposcope_core::types::collections::{FxHashMap, FxHashSet};

use crate::aggregation::MatchRecord;
use crate::scopes::{dn, ScopeType};
use super::types::{ScoreBreakdown, BROAD_APPLY_PRINCIPALS};

/// Scores matching policies by coverage breadth, security-filtering breadth,
/// and link placement.
///
/// Only records whose link is enabled or whose link state is unknown are
/// considered; a known-disabled link excludes that scope, an unresolved one
/// is conservatively included.
pub struct BaselineScorer {
    broad_principals: Vec<String>,
}

impl BaselineScorer {
    /// Scorer with the built-in broad-principal vocabulary.
    pub fn new() -> Self {
        Self {
            broad_principals: BROAD_APPLY_PRINCIPALS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Scorer with extra vocabulary entries on top of the built-ins.
    pub fn with_extra_principals(extra: &[String]) -> Self {
        let mut scorer = Self::new();
        scorer.broad_principals.extend(extra.iter().cloned());
        scorer
    }

    /// One breakdown per policy, sorted by `total_score` descending.
    ///
    /// Ties break by policy name ascending, then policy id ascending, so the
    /// ranking never depends on input order. No truncation happens here;
    /// callers take a top-N view for display.
    pub fn score(&self, records: &[MatchRecord]) -> Vec<ScoreBreakdown> {
        let mut order: Vec<&str> = Vec::new();
        let mut by_policy: FxHashMap<&str, Vec<&MatchRecord>> = FxHashMap::default();
        for record in records {
            by_policy
                .entry(record.policy_id.as_str())
                .or_insert_with(|| {
                    order.push(record.policy_id.as_str());
                    Vec::new()
                })
                .push(record);
        }

        let mut breakdowns: Vec<ScoreBreakdown> = order
            .into_iter()
            .map(|policy_id| self.score_policy(&by_policy[policy_id]))
            .collect();

        breakdowns.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.policy_name.cmp(&b.policy_name))
                .then_with(|| a.policy_id.cmp(&b.policy_id))
        });
        breakdowns
    }

    fn score_policy(&self, records: &[&MatchRecord]) -> ScoreBreakdown {
        let considered: Vec<&&MatchRecord> =
            records.iter().filter(|r| !r.scope.is_disabled()).collect();

        let mut distinct_dns: FxHashSet<String> = FxHashSet::default();
        for record in &considered {
            if !record.scope.scope_dn.is_empty() {
                distinct_dns.insert(dn::normalize(&record.scope.scope_dn));
            }
        }
        let linked_scope_count = distinct_dns.len();

        let looks_broad_apply = records.iter().any(|record| {
            record.security_filtering_apply.iter().any(|principal| {
                self.broad_principals.iter().any(|broad| principal.contains(broad.as_str()))
            })
        });

        let has_domain_link = considered
            .iter()
            .any(|r| r.scope.scope_type == ScopeType::Domain && !r.scope.scope_dn.is_empty());

        let enforced_link_count = considered
            .iter()
            .filter(|r| r.scope.link_enforced == Some(true))
            .count();

        let scope_score = linked_scope_count as i32 * 2;
        let broad_apply_score = if looks_broad_apply { 10 } else { -10 };
        let domain_link_score = match (has_domain_link, looks_broad_apply) {
            (true, true) => 8,
            (true, false) => -3,
            (false, _) => 0,
        };
        let enforced_score = (enforced_link_count as i32).min(3);

        ScoreBreakdown {
            policy_id: records[0].policy_id.clone(),
            policy_name: records[0].policy_name.clone(),
            scope_score,
            broad_apply_score,
            domain_link_score,
            enforced_score,
            total_score: scope_score + broad_apply_score + domain_link_score + enforced_score,
            linked_scope_count,
            has_domain_link,
            looks_broad_apply,
            enforced_link_count,
        }
    }
}

impl Default for BaselineScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading slice of an already-sorted score sequence.
pub fn top_candidates(scores: &[ScoreBreakdown], n: usize) -> &[ScoreBreakdown] {
    &scores[..n.min(scores.len())]
}
