//! Baseline candidate scoring.

pub mod baseline;
pub mod types;

pub use baseline::BaselineScorer;
pub use types::{ScoreBreakdown, BROAD_APPLY_PRINCIPALS};
