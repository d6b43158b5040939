//! Hash collections used for internal grouping.
//!
//! FxHash is not DoS-resistant; keys here are directory paths and policy
//! identifiers from a trusted query boundary, never attacker-controlled input.

pub use rustc_hash::{FxHashMap, FxHashSet};
