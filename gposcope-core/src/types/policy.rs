//! Policy object reference.

use serde::{Deserialize, Serialize};

/// A policy object, referenced by value throughout the engine.
///
/// The identifier is an opaque unique key owned by the directory collaborator
/// (for policy objects this is the braced GUID); the name is for display only
/// and carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyRef {
    /// Opaque unique key, e.g. `{31B2F340-016D-11D2-945F-00C04FB984F9}`.
    pub id: String,
    /// Display name, e.g. `Default Domain Policy`.
    pub name: String,
}

impl PolicyRef {
    /// Create a new policy reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_ref_new() {
        let p = PolicyRef::new("{AAAA}", "Baseline");
        assert_eq!(p.id, "{AAAA}");
        assert_eq!(p.name, "Baseline");
    }
}
