//! Scope types and records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of hierarchy container a policy is linked to.
///
/// Closed variant classified once from the container's directory class;
/// unrecognized classes are preserved in `Other` rather than discarded.
/// The derived order (Domain < OrganizationalUnit < Site < Other) is the
/// display order used when sorting resolved scopes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScopeType {
    Domain,
    OrganizationalUnit,
    Site,
    Other(String),
}

impl ScopeType {
    /// Classify a directory class string. Case-insensitive.
    pub fn from_directory_class(class: &str) -> Self {
        match class.to_lowercase().as_str() {
            "domaindns" => Self::Domain,
            "organizationalunit" => Self::OrganizationalUnit,
            "site" => Self::Site,
            _ => Self::Other(class.to_string()),
        }
    }

    /// Scope kind as string.
    pub fn name(&self) -> &str {
        match self {
            Self::Domain => "domain",
            Self::OrganizationalUnit => "organizational-unit",
            Self::Site => "site",
            Self::Other(class) => class,
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One (policy, link) scope. Immutable once created.
///
/// `None` link state means the options could not be resolved from the link
/// attribute: unknown, not disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeRecord {
    pub scope_type: ScopeType,
    /// Display name: the domain's display name for domain scopes, the leaf
    /// name for sites, the raw hierarchical path otherwise.
    pub scope_name: String,
    /// Hierarchical path of the container; unique key within a domain.
    pub scope_dn: String,
    pub link_enabled: Option<bool>,
    pub link_enforced: Option<bool>,
}

impl ScopeRecord {
    /// Sentinel for a policy with zero links, so an unlinked content match is
    /// still visible downstream.
    pub fn unlinked() -> Self {
        Self {
            scope_type: ScopeType::Other("unlinked".to_string()),
            scope_name: String::new(),
            scope_dn: String::new(),
            link_enabled: None,
            link_enforced: None,
        }
    }

    /// True for the empty-scope sentinel.
    pub fn is_unlinked(&self) -> bool {
        self.scope_dn.is_empty()
    }

    /// True only when the link is known to be disabled.
    pub fn is_disabled(&self) -> bool {
        self.link_enabled == Some(false)
    }
}
