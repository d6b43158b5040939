//! Link-attribute parsing.
//!
//! A container's link attribute holds an ordered queue of entries, one per
//! linked policy:
//!
//! ```text
//! [<reference>;<options>][<reference>;<options>]...
//! [LDAP://cn={GUID-A},cn=policies,cn=system,DC=example,DC=com;0][LDAP://cn={GUID-B},...;2]
//! ```
//!
//! Extraction must isolate the entry whose reference contains the queried
//! policy's identifier and capture that entry's trailing option digits,
//! never an arbitrary entry's.

use std::sync::LazyLock;

use regex::Regex;

/// One `[<reference>;<options>]` entry. References never contain `;` or `]`.
static LINK_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^;\]]*);(\d+)\]").expect("link entry pattern"));

/// Extract the link options for one policy out of a multi-entry attribute.
///
/// The identifier match is case-insensitive (directory references mix GUID
/// casing freely). Returns `None` for malformed or absent text; the caller
/// records the link state as unknown, never as an error.
pub fn link_options_for(raw: &str, policy_id: &str) -> Option<u32> {
    if policy_id.is_empty() {
        return None;
    }
    let needle = policy_id.to_lowercase();
    for caps in LINK_ENTRY.captures_iter(raw) {
        if caps[1].to_lowercase().contains(&needle) {
            return caps[2].parse().ok();
        }
    }
    None
}
