//! Distinguished-name helpers.
//!
//! Hierarchical paths use a suffix-containment relation: a descendant's DN
//! always ends with its ancestor's DN behind a `,` component boundary.
//! Directory DNs compare case-insensitively.

/// True when `child` is a strict hierarchical descendant of `parent`.
///
/// Exact suffix containment at a component boundary, never a substring
/// match: `OU=CorpEast,...` is not a descendant of `OU=Corp,...` and two
/// siblings sharing only the domain tail never match each other.
pub fn is_descendant_of(child: &str, parent: &str) -> bool {
    if parent.is_empty() || child.len() <= parent.len() {
        return false;
    }
    let child_lower = child.to_lowercase();
    let parent_lower = parent.to_lowercase();
    if !child_lower.ends_with(&parent_lower) {
        return false;
    }
    child_lower.as_bytes()[child_lower.len() - parent_lower.len() - 1] == b','
}

/// Case-insensitive DN equality.
pub fn equals(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.to_lowercase() == b.to_lowercase()
}

/// Lowercased DN, used as a grouping key.
pub fn normalize(dn: &str) -> String {
    dn.to_lowercase()
}

/// Value of the first path component: `CN=Milan,CN=Sites,...` → `Milan`.
///
/// A component without `=` is returned whole.
pub fn leaf_name(dn: &str) -> &str {
    let first = dn.split(',').next().unwrap_or(dn);
    match first.split_once('=') {
        Some((_, value)) => value,
        None => first,
    }
}
