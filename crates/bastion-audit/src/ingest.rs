//! Ingestion boundary: loosely-typed credential payloads → [`Credential`].
//!
//! The password API hands back JSON whose ids may be strings or integers
//! and whose optional fields may be missing or null. All of that is
//! resolved here so the analyzer only ever sees well-formed records.

use std::collections::HashSet;

use bastion_rules::{Credential, CredentialId, SecretValue};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuditError;

/// Platform name used when a payload omits one.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Credential id as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_id(self) -> Result<CredentialId, AuditError> {
        match self {
            Self::Number(n) => Ok(CredentialId::new(n.to_string())),
            Self::Text(s) if s.trim().is_empty() => {
                Err(AuditError::InvalidPayload("blank credential id".into()))
            }
            Self::Text(s) => Ok(CredentialId::new(s)),
        }
    }
}

/// One credential exactly as the password API returns it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCredential {
    pub id: RawId,
    #[serde(default, alias = "name")]
    pub platform: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "password")]
    pub secret: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl std::fmt::Debug for RawCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawCredential")
            .field("id", &self.id)
            .field("platform", &self.platform)
            .field("username", &self.username)
            .field("secret", &"***")
            .finish_non_exhaustive()
    }
}

impl RawCredential {
    /// Validate into a [`Credential`].
    ///
    /// A missing platform becomes [`UNKNOWN_PLATFORM`]; a missing secret
    /// becomes the empty secret, which the analyzer reports as invalid.
    /// A timestamp that does not parse is dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidPayload`] for a blank id.
    pub fn validate(self) -> Result<Credential, AuditError> {
        let id = self.id.into_id()?;

        let platform = match self.platform {
            Some(p) if !p.trim().is_empty() => p,
            _ => {
                tracing::warn!(credential_id = %id, "Credential has no platform name");
                UNKNOWN_PLATFORM.to_string()
            }
        };

        let created_at = parse_timestamp(&id, "createdAt", self.created_at.as_deref());
        let last_updated = parse_timestamp(&id, "lastUpdated", self.last_updated.as_deref());

        Ok(Credential {
            id,
            platform,
            username: self.username.unwrap_or_default(),
            secret: SecretValue::new(self.secret.unwrap_or_default()),
            created_at,
            last_updated,
        })
    }
}

fn parse_timestamp(id: &CredentialId, field: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<DateTime<Utc>>() {
        Ok(at) => Some(at),
        Err(e) => {
            tracing::warn!(credential_id = %id, field, "Ignoring unparseable timestamp: {e}");
            None
        }
    }
}

/// Reject batches in which two records share an id.
///
/// # Errors
///
/// Returns [`AuditError::DuplicateId`] naming the first repeated id.
pub fn ensure_unique_ids(records: &[Credential]) -> Result<(), AuditError> {
    let mut seen: HashSet<&CredentialId> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(AuditError::DuplicateId(record.id.to_string()));
        }
    }
    Ok(())
}

/// Parse a JSON array of credential payloads into a validated batch.
///
/// # Errors
///
/// Returns [`AuditError::InvalidPayload`] for malformed JSON or records,
/// and [`AuditError::DuplicateId`] if ids repeat.
pub fn parse_credentials(json: &str) -> Result<Vec<Credential>, AuditError> {
    let raw: Vec<RawCredential> =
        serde_json::from_str(json).map_err(|e| AuditError::InvalidPayload(e.to_string()))?;

    let records = raw
        .into_iter()
        .map(RawCredential::validate)
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique_ids(&records)?;
    Ok(records)
}
