//! Credential records as seen by the classifiers.
//!
//! A [`Credential`] owns its secret through [`SecretValue`], which is
//! zeroized on drop and never printed. Only [`CredentialSummary`] values
//! (id + platform) are allowed to leave an analysis.

use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CredentialId
// ---------------------------------------------------------------------------

/// Opaque credential identifier, unique within one analysis batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialId(String);

impl CredentialId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CredentialId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CredentialId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for CredentialId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// SecretValue
// ---------------------------------------------------------------------------

/// Plaintext password held in memory for the duration of an analysis.
///
/// Wraps [`SecretString`] from the `secrecy` crate and adds:
/// - Masked `Debug` / `Display` output (`SecretValue(***)`)
/// - Zeroization on drop (via `secrecy`)
/// - `Clone` (a fresh zeroizing allocation per copy)
pub struct SecretValue {
    inner: SecretString,
}

impl SecretValue {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            inner: SecretString::from(secret),
        }
    }

    /// Expose the plaintext. Keep the borrow inside a single expression
    /// wherever possible.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.inner.expose_secret()
    }

    /// Returns `true` if the secret is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl Clone for SecretValue {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(***)")
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(***)")
    }
}

impl From<&str> for SecretValue {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for SecretValue {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// One stored (platform, username, secret) triple from the user's vault.
///
/// Classifiers only ever borrow credentials; nothing in this workspace
/// mutates a record it was handed.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    /// Human-readable service name (e.g. `"Google"`).
    pub platform: String,
    pub username: String,
    pub secret: SecretValue,
    pub created_at: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Credential {
    #[must_use]
    pub fn new(
        id: impl Into<CredentialId>,
        platform: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<SecretValue>,
    ) -> Self {
        Self {
            id: id.into(),
            platform: platform.into(),
            username: username.into(),
            secret: secret.into(),
            created_at: None,
            last_updated: None,
        }
    }

    #[must_use]
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    #[must_use]
    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// When the password was last set: `last_updated`, else `created_at`.
    #[must_use]
    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.or(self.created_at)
    }

    /// A record with an empty secret cannot be classified.
    #[must_use]
    pub fn is_classifiable(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Secret-free reference to this record.
    #[must_use]
    pub fn summary(&self) -> CredentialSummary {
        CredentialSummary {
            id: self.id.clone(),
            platform: self.platform.clone(),
        }
    }
}

/// A credential reference (id + platform), safe to hand to any caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSummary {
    pub id: CredentialId,
    pub platform: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
