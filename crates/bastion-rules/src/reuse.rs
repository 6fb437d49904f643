//! Reused-password detection.
//!
//! Secrets are compared through their BLAKE3 fingerprints so that the
//! grouping map never holds plaintext. Matching is exact: two secrets are
//! reused only if they are byte-for-byte identical.

use std::collections::HashMap;

use serde::Serialize;

use crate::credential::{Credential, CredentialId, CredentialSummary};

/// BLAKE3 digest of a secret's UTF-8 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fingerprint(***)")
    }
}

/// Fingerprint a secret for equality comparison.
#[must_use]
pub fn fingerprint(secret: &str) -> Fingerprint {
    Fingerprint(blake3::hash(secret.as_bytes()).into())
}

/// A group of credentials sharing the same password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReusedGroup {
    pub credentials: Vec<CredentialSummary>,
}

/// Group record indices by fingerprint, keeping groups in order of their
/// first member. Records with an empty secret are skipped.
fn group_indices(records: &[Credential]) -> Vec<Vec<usize>> {
    let mut slots: HashMap<Fingerprint, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if !record.is_classifiable() {
            continue;
        }
        let key = fingerprint(record.secret.expose());
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len().saturating_sub(1)
        });
        if let Some(group) = groups.get_mut(slot) {
            group.push(index);
        }
    }

    groups.retain(|g| g.len() >= 2);
    groups
}

/// Ids of every record whose secret is shared with at least one other
/// record in `records`, in input order.
///
/// Reuse is symmetric: all members of a shared group are returned, not
/// only the later duplicates.
#[must_use]
pub fn detect_reused(records: &[Credential]) -> Vec<CredentialId> {
    let mut flagged: Vec<usize> = group_indices(records).into_iter().flatten().collect();
    flagged.sort_unstable();
    flagged
        .into_iter()
        .filter_map(|i| records.get(i).map(|r| r.id.clone()))
        .collect()
}

/// One flag per record, `true` where the record's secret is shared with
/// another record. Indexed like `records`, so repeated ids cannot blur
/// which record is reused.
#[must_use]
pub fn reused_flags(records: &[Credential]) -> Vec<bool> {
    let mut flags = vec![false; records.len()];
    for index in group_indices(records).into_iter().flatten() {
        if let Some(flag) = flags.get_mut(index) {
            *flag = true;
        }
    }
    flags
}

/// All groups of two or more records sharing a secret.
#[must_use]
pub fn find_reused_groups(records: &[Credential]) -> Vec<ReusedGroup> {
    group_indices(records)
        .into_iter()
        .map(|indices| ReusedGroup {
            credentials: indices
                .into_iter()
                .filter_map(|i| records.get(i).map(Credential::summary))
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
