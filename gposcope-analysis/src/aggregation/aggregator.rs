//! Match aggregation over content-matching policies.

use rayon::prelude::*;

use gposcope_core::traits::cancellation::Cancellable;
use gposcope_core::traits::directory::DirectoryProvider;
use gposcope_core::types::policy::PolicyRef;
use gposcope_core::{AuditError, DirectoryError};

use crate::scopes::{ScopeRecord, ScopeResolver};
use super::types::MatchRecord;

/// Builds the MatchRecord sequence for a set of policies that already
/// satisfied the external content-match predicate.
///
/// Per-policy resolution is independent and side-effect-free, so the
/// aggregator can fan out across threads; the merge is ordered, and the
/// parallel path produces the exact sequence the sequential path does.
pub struct MatchAggregator<'a, P: DirectoryProvider> {
    provider: &'a P,
    parallel: bool,
}

impl<'a, P: DirectoryProvider> MatchAggregator<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider, parallel: false }
    }

    pub fn with_parallelism(provider: &'a P, parallel: bool) -> Self {
        Self { provider, parallel }
    }

    /// Aggregate match records for the given policies, in input order.
    pub fn aggregate(&self, policies: &[PolicyRef]) -> Result<Vec<MatchRecord>, AuditError> {
        self.aggregate_with(policies, None)
    }

    /// As [`aggregate`](Self::aggregate), checking the token between
    /// per-policy units.
    pub fn aggregate_cancellable(
        &self,
        policies: &[PolicyRef],
        token: &dyn Cancellable,
    ) -> Result<Vec<MatchRecord>, AuditError> {
        self.aggregate_with(policies, Some(token))
    }

    fn aggregate_with(
        &self,
        policies: &[PolicyRef],
        token: Option<&dyn Cancellable>,
    ) -> Result<Vec<MatchRecord>, AuditError> {
        let per_policy: Result<Vec<Vec<MatchRecord>>, AuditError> = if self.parallel {
            policies
                .par_iter()
                .map(|policy| self.records_for_policy_checked(policy, token))
                .collect()
        } else {
            policies
                .iter()
                .map(|policy| self.records_for_policy_checked(policy, token))
                .collect()
        };

        let records: Vec<MatchRecord> = per_policy?.into_iter().flatten().collect();
        tracing::debug!(
            policies = policies.len(),
            records = records.len(),
            "aggregated match records"
        );
        Ok(records)
    }

    fn records_for_policy_checked(
        &self,
        policy: &PolicyRef,
        token: Option<&dyn Cancellable>,
    ) -> Result<Vec<MatchRecord>, AuditError> {
        if token.is_some_and(|t| t.is_cancelled()) {
            return Err(AuditError::Cancelled);
        }
        self.records_for_policy(policy).map_err(AuditError::from)
    }

    fn records_for_policy(&self, policy: &PolicyRef) -> Result<Vec<MatchRecord>, DirectoryError> {
        let scopes = ScopeResolver::new(self.provider).resolve(policy)?;

        // Security filtering and WMI filter failures are soft: the boundary
        // reports them as warnings and the record carries the absence.
        let principals = match self.provider.security_filtering_apply(policy) {
            Ok(principals) => principals,
            Err(e) => {
                tracing::warn!(
                    policy = %policy.id,
                    error = %e,
                    "security filtering unavailable, continuing with empty principal list"
                );
                Vec::new()
            }
        };
        let wmi_filter_name = match self.provider.wmi_filter_name(policy) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(policy = %policy.id, error = %e, "WMI filter name unavailable");
                None
            }
        };

        if scopes.is_empty() {
            return Ok(vec![MatchRecord {
                policy_id: policy.id.clone(),
                policy_name: policy.name.clone(),
                scope: ScopeRecord::unlinked(),
                security_filtering_apply: principals,
                wmi_filter_name,
            }]);
        }

        Ok(scopes
            .into_iter()
            .map(|scope| MatchRecord {
                policy_id: policy.id.clone(),
                policy_name: policy.name.clone(),
                scope,
                security_filtering_apply: principals.clone(),
                wmi_filter_name: wmi_filter_name.clone(),
            })
            .collect())
    }
}
