//! gposcope analysis engine.
//!
//! Data flows strictly downward: link decoding feeds scope resolution, scope
//! resolution feeds match aggregation, and the overlap analyzer and baseline
//! scorer are independent consumers of the finalized match-record sequence.
//! Every component is a pure, synchronous transformation; all blocking work
//! lives behind the collaborator traits in `gposcope-core`.

pub mod aggregation;
pub mod links;
pub mod overlap;
pub mod pipeline;
pub mod report;
pub mod scopes;
pub mod scoring;

pub use aggregation::{MatchAggregator, MatchRecord};
pub use overlap::{analyze, HierarchyOverlap, OverlapReport, SameScopeOverlap};
pub use pipeline::{AuditDiagnostics, AuditPipeline, AuditResult};
pub use scoring::{BaselineScorer, ScoreBreakdown};
