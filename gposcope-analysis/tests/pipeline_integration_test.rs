//! End-to-end pipeline tests over an in-memory directory snapshot.

use std::collections::HashMap;

use gposcope_core::traits::cancellation::{Cancellable, CancellationToken};
use gposcope_core::traits::content_match::ContentMatcher;
use gposcope_core::traits::directory::{DirectoryProvider, LinkedContainer};
use gposcope_core::types::policy::PolicyRef;
use gposcope_core::{AuditConfig, AuditError, DirectoryError};

use gposcope_analysis::pipeline::AuditPipeline;
use gposcope_analysis::scopes::ScopeType;

const BASELINE: &str = "{11111111-AAAA-4AAA-8AAA-111111111111}";
const SERVER_HARDENING: &str = "{22222222-BBBB-4BBB-8BBB-222222222222}";
const LEGACY: &str = "{33333333-CCCC-4CCC-8CCC-333333333333}";
const UNRELATED: &str = "{44444444-DDDD-4DDD-8DDD-444444444444}";
const DRIFTED: &str = "{55555555-EEEE-4EEE-8EEE-555555555555}";

const DOMAIN_DN: &str = "DC=example,DC=com";
const SERVERS_DN: &str = "OU=Servers,DC=example,DC=com";
const WORKSTATIONS_DN: &str = "OU=Workstations,DC=example,DC=com";
const OTHER_DN: &str = "OU=Other,DC=example,DC=com";
const THINGS_DN: &str = "OU=Things,DC=example,DC=com";

/// Immutable snapshot of a small domain: link placements, security
/// filtering, WMI filters, and exported policy content.
struct StaticDirectory {
    containers: HashMap<String, Vec<LinkedContainer>>,
    principals: HashMap<String, Vec<String>>,
    wmi: HashMap<String, String>,
    content: HashMap<String, String>,
}

fn link_entry(policy_id: &str, options: u32) -> String {
    format!("[LDAP://cn={policy_id},cn=policies,cn=system,DC=example,DC=com;{options}]")
}

fn container(raw: String, path: &str, class: &str) -> LinkedContainer {
    LinkedContainer {
        raw_link_attribute: raw,
        container_path: path.to_string(),
        container_class: class.to_string(),
    }
}

impl StaticDirectory {
    fn snapshot() -> Self {
        // OU=Servers links two policies, so its attribute carries both
        // entries; extraction has to pick the right one per policy.
        let servers_attr = format!(
            "{}{}",
            link_entry(BASELINE, 0),
            link_entry(SERVER_HARDENING, 0)
        );

        let mut containers = HashMap::new();
        containers.insert(
            BASELINE.to_string(),
            vec![
                container(link_entry(BASELINE, 2), DOMAIN_DN, "domainDNS"),
                container(servers_attr.clone(), SERVERS_DN, "organizationalUnit"),
                container(link_entry(BASELINE, 0), WORKSTATIONS_DN, "organizationalUnit"),
            ],
        );
        containers.insert(
            SERVER_HARDENING.to_string(),
            vec![container(servers_attr, SERVERS_DN, "organizationalUnit")],
        );
        containers.insert(LEGACY.to_string(), vec![]);
        containers.insert(
            DRIFTED.to_string(),
            vec![
                container(link_entry(DRIFTED, 1), OTHER_DN, "organizationalUnit"),
                container("gibberish".to_string(), THINGS_DN, "organizationalUnit"),
            ],
        );

        let mut principals = HashMap::new();
        principals.insert(BASELINE.to_string(), vec!["Authenticated Users".to_string()]);
        principals.insert(SERVER_HARDENING.to_string(), vec!["Server Admins".to_string()]);
        principals.insert(LEGACY.to_string(), vec!["Domain Computers".to_string()]);
        principals.insert(DRIFTED.to_string(), vec!["Site Ops".to_string()]);

        let mut wmi = HashMap::new();
        wmi.insert(SERVER_HARDENING.to_string(), "Windows Server only".to_string());

        let mut content = HashMap::new();
        content.insert(BASELINE.to_string(), "ScreenSaverTimeout=900".to_string());
        content.insert(SERVER_HARDENING.to_string(), "ScreenSaverTimeout=600".to_string());
        content.insert(LEGACY.to_string(), "ScreenSaverTimeout=1200".to_string());
        content.insert(DRIFTED.to_string(), "ScreenSaverTimeout=300".to_string());
        content.insert(UNRELATED.to_string(), "FirewallProfile=Domain".to_string());

        Self { containers, principals, wmi, content }
    }
}

impl DirectoryProvider for StaticDirectory {
    fn linked_containers(
        &self,
        policy: &PolicyRef,
    ) -> Result<Vec<LinkedContainer>, DirectoryError> {
        Ok(self.containers.get(&policy.id).cloned().unwrap_or_default())
    }

    fn security_filtering_apply(&self, policy: &PolicyRef) -> Result<Vec<String>, DirectoryError> {
        Ok(self.principals.get(&policy.id).cloned().unwrap_or_default())
    }

    fn wmi_filter_name(&self, policy: &PolicyRef) -> Result<Option<String>, DirectoryError> {
        Ok(self.wmi.get(&policy.id).cloned())
    }

    fn domain_display_name(&self) -> String {
        "example.com".to_string()
    }
}

impl ContentMatcher for StaticDirectory {
    fn has_content_match(&self, policy: &PolicyRef, pattern: &str) -> Result<bool, DirectoryError> {
        Ok(self.content.get(&policy.id).is_some_and(|c| c.contains(pattern)))
    }
}

fn matching_policies() -> Vec<PolicyRef> {
    vec![
        PolicyRef::new(BASELINE, "Security Baseline"),
        PolicyRef::new(SERVER_HARDENING, "Server Hardening"),
        PolicyRef::new(LEGACY, "Legacy Screensaver"),
        PolicyRef::new(DRIFTED, "Drifted"),
    ]
}

#[test]
fn test_full_pipeline_run() {
    let directory = StaticDirectory::snapshot();
    let pipeline = AuditPipeline::new(&directory);
    let result = pipeline.run(&matching_policies()).unwrap();

    // 3 baseline links + 1 server link + 1 unlinked sentinel + 2 drifted links.
    assert_eq!(result.matches.len(), 7);
    let sentinel = result.matches.iter().find(|m| m.policy_id == LEGACY).unwrap();
    assert!(sentinel.is_unlinked());

    // Per-policy data is copied onto every record.
    let hardened = result
        .matches
        .iter()
        .find(|m| m.policy_id == SERVER_HARDENING)
        .unwrap();
    assert_eq!(hardened.wmi_filter_name.as_deref(), Some("Windows Server only"));
    assert_eq!(hardened.scope.scope_type, ScopeType::OrganizationalUnit);

    // Both policies on OU=Servers form the only same-scope group.
    assert_eq!(result.same_scope.len(), 1);
    let group = &result.same_scope[0];
    assert_eq!(group.scope_dn, SERVERS_DN);
    assert_eq!(group.records.len(), 2);

    // The domain link parents every OU record; no OUs nest in this snapshot.
    assert_eq!(result.hierarchy.len(), 5);
    assert!(result
        .hierarchy
        .iter()
        .all(|pair| pair.parent.scope.scope_type == ScopeType::Domain));

    // Ranking: baseline 6+10+8+1=25, legacy 0+10+0+0=10, then the two
    // narrow policies tied at 2-10+0+0=-8, ordered by name.
    let names: Vec<&str> = result.scores.iter().map(|s| s.policy_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Security Baseline", "Legacy Screensaver", "Drifted", "Server Hardening"]
    );
    assert_eq!(result.scores[0].total_score, 25);
    assert_eq!(result.scores[1].total_score, 10);
    assert_eq!(result.scores[2].total_score, -8);
    assert_eq!(result.scores[3].total_score, -8);

    // The drifted policy: disabled link excluded, unknown link included.
    let drifted = result.scores.iter().find(|s| s.policy_id == DRIFTED).unwrap();
    assert_eq!(drifted.linked_scope_count, 1);

    let d = &result.diagnostics;
    assert_eq!(d.policy_count, 4);
    assert_eq!(d.match_record_count, 7);
    assert_eq!(d.unlinked_policy_count, 1);
    assert_eq!(d.same_scope_group_count, 1);
    assert_eq!(d.hierarchy_overlap_count, 5);
    assert_eq!(d.disabled_link_count, 1);
    assert_eq!(d.unknown_link_count, 1);

    assert_eq!(pipeline.candidate_limit(), 3);
    assert_eq!(result.top_candidates(pipeline.candidate_limit()).len(), 3);
    assert_eq!(result.top_candidates(3)[0].policy_name, "Security Baseline");
}

#[test]
fn test_content_filter_excludes_non_matching_policies() {
    let directory = StaticDirectory::snapshot();
    let mut all = matching_policies();
    all.push(PolicyRef::new(UNRELATED, "Firewall Profile"));

    let pipeline = AuditPipeline::new(&directory);
    let filtered = pipeline
        .run_filtered(&directory, &all, "ScreenSaverTimeout")
        .unwrap();
    let direct = pipeline.run(&matching_policies()).unwrap();

    assert_eq!(filtered, direct);
    assert!(filtered.matches.iter().all(|m| m.policy_id != UNRELATED));
}

#[test]
fn test_zero_match_scenario() {
    let directory = StaticDirectory::snapshot();
    let pipeline = AuditPipeline::new(&directory);

    let empty = pipeline.run(&[]).unwrap();
    assert!(empty.matches.is_empty());
    assert!(empty.same_scope.is_empty());
    assert!(empty.hierarchy.is_empty());
    assert!(empty.scores.is_empty());
    assert_eq!(empty.diagnostics.policy_count, 0);

    let none = pipeline
        .run_filtered(&directory, &matching_policies(), "NoSuchSetting")
        .unwrap();
    assert!(none.matches.is_empty());
    assert!(none.scores.is_empty());
}

#[test]
fn test_pipeline_is_idempotent_over_a_snapshot() {
    let directory = StaticDirectory::snapshot();
    let pipeline = AuditPipeline::new(&directory);

    let first = pipeline.run(&matching_policies()).unwrap();
    let second = pipeline.run(&matching_policies()).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_parallel_run_matches_sequential() {
    let directory = StaticDirectory::snapshot();
    let sequential = AuditPipeline::new(&directory).run(&matching_policies()).unwrap();

    let config = AuditConfig { parallel: Some(true), ..AuditConfig::default() };
    let parallel = AuditPipeline::with_config(&directory, config)
        .run(&matching_policies())
        .unwrap();

    assert_eq!(
        serde_json::to_string(&sequential).unwrap(),
        serde_json::to_string(&parallel).unwrap()
    );
}

#[test]
fn test_cancelled_run_aborts() {
    let directory = StaticDirectory::snapshot();
    let token = CancellationToken::new();
    token.cancel();

    let err = AuditPipeline::new(&directory)
        .run_cancellable(&matching_policies(), &token)
        .unwrap_err();
    assert!(matches!(err, AuditError::Cancelled));
}

#[test]
fn test_live_token_run_matches_plain_run() {
    let directory = StaticDirectory::snapshot();
    let pipeline = AuditPipeline::new(&directory);
    let token = CancellationToken::new();

    let plain = pipeline.run(&matching_policies()).unwrap();
    let tokened = pipeline.run_cancellable(&matching_policies(), &token).unwrap();
    assert_eq!(plain, tokened);
}

#[test]
fn test_extra_broad_principals_lift_a_narrow_policy() {
    let directory = StaticDirectory::snapshot();
    let config = AuditConfig {
        extra_broad_principals: vec!["Server Admins".to_string()],
        ..AuditConfig::default()
    };

    let result = AuditPipeline::with_config(&directory, config)
        .run(&matching_policies())
        .unwrap();
    let hardened = result
        .scores
        .iter()
        .find(|s| s.policy_id == SERVER_HARDENING)
        .unwrap();
    assert!(hardened.looks_broad_apply);
    // 2 + 10 + 0 + 0 with the widened vocabulary.
    assert_eq!(hardened.total_score, 12);
}
