#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for report accounting.
//!
//! Verifies for arbitrary batches:
//! - strength buckets partition `total_passwords`
//! - overlay counts equal their list lengths
//! - `analyze(x) == analyze(x)` with a deterministic checker

use std::sync::Arc;

use bastion_audit::{Analyzer, AuditConfig, Credential, KnownBreachList, Report};
use proptest::prelude::*;

fn secret_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("123456".to_string()),
        Just("Tr0ub4dor&3xyz".to_string()),
        "[a-z]{1,10}",
        "[a-zA-Z0-9!@#]{6,16}",
    ]
}

fn batch_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(secret_strategy(), 0..20)
}

fn analyze(secrets: &[String]) -> Report {
    let records: Vec<Credential> = secrets
        .iter()
        .enumerate()
        .map(|(i, s)| Credential::new(i as u64, format!("site-{i}"), "user", s.as_str()))
        .collect();
    let analyzer = Analyzer::new(
        Arc::new(KnownBreachList::with_common_passwords()),
        AuditConfig::default(),
    )
    .unwrap();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(analyzer.analyze(&records))
}

proptest! {
    #[test]
    fn strength_buckets_partition_total(secrets in batch_strategy()) {
        let report = analyze(&secrets);
        prop_assert_eq!(report.total_passwords, secrets.len());
        prop_assert_eq!(
            report.strong_count + report.medium_count + report.weak_count,
            report.total_passwords
        );
    }

    #[test]
    fn counts_match_lists(secrets in batch_strategy()) {
        let report = analyze(&secrets);
        prop_assert_eq!(report.weak_count, report.weak_passwords.len());
        prop_assert_eq!(report.compromised_count, report.compromised_passwords.len());
        prop_assert_eq!(report.reused_count, report.reused_passwords.len());
        prop_assert_eq!(
            report.reused_count,
            report.reused_groups.iter().map(|g| g.credentials.len()).sum::<usize>()
        );
        prop_assert!(report.health_score <= 100);
    }

    #[test]
    fn analysis_is_idempotent(secrets in batch_strategy()) {
        prop_assert_eq!(analyze(&secrets), analyze(&secrets));
    }

    #[test]
    fn empty_secrets_are_invalid_and_weak(secrets in batch_strategy()) {
        let report = analyze(&secrets);
        let empty = secrets.iter().filter(|s| s.is_empty()).count();
        prop_assert_eq!(report.diagnostics.invalid_count, empty);
        prop_assert!(report.weak_count >= empty);
    }
}
