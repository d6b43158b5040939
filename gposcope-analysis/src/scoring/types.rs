//! Score breakdown records.

use serde::{Deserialize, Serialize};

/// Principal names that signal a broad apply surface. A policy whose
/// security filtering contains any of these (as a substring, so
/// domain-qualified forms like `EXAMPLE\Authenticated Users` count) looks
/// like a baseline rather than a targeted exception.
pub const BROAD_APPLY_PRINCIPALS: [&str; 4] = [
    "Authenticated Users",
    "Domain Computers",
    "Domain Controllers",
    "Enterprise Domain Controllers",
];

/// Per-policy score with every component kept visible.
///
/// Derived data, recomputed every run, never persisted. The heuristic is
/// transparent by contract: a reader must be able to reconstruct
/// `total_score` from the component fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub policy_id: String,
    pub policy_name: String,
    /// 2 points per distinct linked scope.
    pub scope_score: i32,
    /// +10 for a broad apply surface, -10 for a narrow one.
    pub broad_apply_score: i32,
    /// +8 broad domain link, -3 narrow domain link, 0 without one.
    pub domain_link_score: i32,
    /// Enforced link count, capped at 3.
    pub enforced_score: i32,
    pub total_score: i32,
    pub linked_scope_count: usize,
    pub has_domain_link: bool,
    pub looks_broad_apply: bool,
    pub enforced_link_count: usize,
}
