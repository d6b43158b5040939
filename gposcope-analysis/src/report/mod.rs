//! Flat rows for the reporting/export boundary.
//!
//! Rendering (CSV, console tables) happens outside the engine; this module
//! only flattens the engine's records into primitive-and-string rows any
//! tabular writer can consume.

pub mod rows;

pub use rows::{
    hierarchy_rows, match_rows, same_scope_rows, score_rows, HierarchyRow, MatchRow,
    SameScopeRow, ScoreRow,
};
