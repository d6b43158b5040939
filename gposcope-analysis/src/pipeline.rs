//! Audit pipeline orchestrator.
//!
//! Aggregation must finish before overlap analysis and scoring run: both
//! consumers need the complete match-record sequence to compute group
//! memberships and per-policy aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};

use gposcope_core::traits::cancellation::Cancellable;
use gposcope_core::traits::content_match::ContentMatcher;
use gposcope_core::traits::directory::DirectoryProvider;
use gposcope_core::types::policy::PolicyRef;
use gposcope_core::{AuditConfig, AuditError};

use crate::aggregation::{MatchAggregator, MatchRecord};
use crate::overlap::{self, HierarchyOverlap, SameScopeOverlap};
use crate::scoring::baseline::top_candidates;
use crate::scoring::{BaselineScorer, ScoreBreakdown};

/// Runs the full analysis: aggregate → {overlaps, scores} → diagnostics.
pub struct AuditPipeline<'a, P: DirectoryProvider> {
    provider: &'a P,
    config: AuditConfig,
}

impl<'a, P: DirectoryProvider> AuditPipeline<'a, P> {
    /// Pipeline with default configuration.
    pub fn new(provider: &'a P) -> Self {
        Self::with_config(provider, AuditConfig::default())
    }

    pub fn with_config(provider: &'a P, config: AuditConfig) -> Self {
        Self { provider, config }
    }

    /// Run over policies that already satisfied the content-match predicate.
    pub fn run(&self, policies: &[PolicyRef]) -> Result<AuditResult, AuditError> {
        let aggregator =
            MatchAggregator::with_parallelism(self.provider, self.config.effective_parallel());
        let matches = aggregator.aggregate(policies)?;
        Ok(self.finish(policies, matches))
    }

    /// As [`run`](Self::run), checking the token between per-policy units.
    pub fn run_cancellable(
        &self,
        policies: &[PolicyRef],
        token: &dyn Cancellable,
    ) -> Result<AuditResult, AuditError> {
        let aggregator =
            MatchAggregator::with_parallelism(self.provider, self.config.effective_parallel());
        let matches = aggregator.aggregate_cancellable(policies, token)?;
        Ok(self.finish(policies, matches))
    }

    /// Apply the content-match predicate first, then run over the matches.
    pub fn run_filtered<M: ContentMatcher>(
        &self,
        matcher: &M,
        policies: &[PolicyRef],
        pattern: &str,
    ) -> Result<AuditResult, AuditError> {
        let mut matching = Vec::new();
        for policy in policies {
            if matcher.has_content_match(policy, pattern)? {
                matching.push(policy.clone());
            }
        }
        tracing::debug!(
            candidates = policies.len(),
            matching = matching.len(),
            "content match filter applied"
        );
        self.run(&matching)
    }

    fn finish(&self, policies: &[PolicyRef], matches: Vec<MatchRecord>) -> AuditResult {
        let overlap_report = overlap::analyze(&matches);
        let scorer = BaselineScorer::with_extra_principals(&self.config.extra_broad_principals);
        let scores = scorer.score(&matches);
        let diagnostics = AuditDiagnostics::compute(policies.len(), &matches, &overlap_report);
        tracing::debug!(%diagnostics, "audit run complete");

        AuditResult {
            matches,
            same_scope: overlap_report.same_scope,
            hierarchy: overlap_report.hierarchy,
            scores,
            diagnostics,
        }
    }

    /// Effective top-N used by [`AuditResult::top_candidates`].
    pub fn candidate_limit(&self) -> usize {
        self.config.effective_top_candidates()
    }
}

/// Everything one analysis run exposes to the reporting layer. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub matches: Vec<MatchRecord>,
    pub same_scope: Vec<SameScopeOverlap>,
    pub hierarchy: Vec<HierarchyOverlap>,
    /// Sorted by total score descending, ties by policy name then id.
    pub scores: Vec<ScoreBreakdown>,
    pub diagnostics: AuditDiagnostics,
}

impl AuditResult {
    /// Leading slice of the ranked candidates.
    pub fn top_candidates(&self, n: usize) -> &[ScoreBreakdown] {
        top_candidates(&self.scores, n)
    }
}

/// Run summary counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditDiagnostics {
    /// Policies fed into the run (after content matching).
    pub policy_count: usize,
    pub match_record_count: usize,
    /// Matching policies with zero links.
    pub unlinked_policy_count: usize,
    pub same_scope_group_count: usize,
    pub hierarchy_overlap_count: usize,
    /// Links known to be disabled.
    pub disabled_link_count: usize,
    /// Links whose options could not be resolved.
    pub unknown_link_count: usize,
}

impl AuditDiagnostics {
    fn compute(
        policy_count: usize,
        matches: &[MatchRecord],
        overlaps: &overlap::OverlapReport,
    ) -> Self {
        Self {
            policy_count,
            match_record_count: matches.len(),
            unlinked_policy_count: matches.iter().filter(|m| m.is_unlinked()).count(),
            same_scope_group_count: overlaps.same_scope.len(),
            hierarchy_overlap_count: overlaps.hierarchy.len(),
            disabled_link_count: matches.iter().filter(|m| m.scope.is_disabled()).count(),
            unknown_link_count: matches
                .iter()
                .filter(|m| !m.is_unlinked() && m.scope.link_enabled.is_none())
                .count(),
        }
    }
}

impl fmt::Display for AuditDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditDiagnostics {{ policies={}, records={}, unlinked={}, same_scope_groups={}, hierarchy_overlaps={}, disabled_links={}, unknown_links={} }}",
            self.policy_count,
            self.match_record_count,
            self.unlinked_policy_count,
            self.same_scope_group_count,
            self.hierarchy_overlap_count,
            self.disabled_link_count,
            self.unknown_link_count,
        )
    }
}
