//! Breach-indicator checks.
//!
//! A [`BreachChecker`] answers one question: does this secret appear in a
//! known breach? The check may be local or remote and may fail; the
//! analyzer turns failures and timeouts into [`CheckOutcome::Unknown`]
//! rather than guessing either way.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bastion_rules::common::COMMON_PASSWORDS;
use bastion_rules::{fingerprint, Fingerprint};
use thiserror::Error;

use crate::error::AuditError;

/// Why a single breach check produced no answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The indicator service failed or refused the request.
    #[error("breach check unavailable: {0}")]
    Unavailable(String),

    /// The check did not answer within the configured timeout.
    #[error("breach check timed out after {0:?}")]
    TimedOut(Duration),
}

/// Result of checking one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Found in a known breach.
    Breached,
    /// Verified absent from the indicator source.
    Clean,
    /// The check failed; the record is neither flagged nor verified.
    Unknown(CheckError),
    /// Not checked (empty secret).
    Skipped,
}

impl CheckOutcome {
    #[must_use]
    pub const fn is_breached(&self) -> bool {
        matches!(self, Self::Breached)
    }
}

/// Pluggable breach-indicator capability.
///
/// Implementations must be idempotent: checking the same secret twice
/// returns the same answer barring an outage.
#[async_trait]
pub trait BreachChecker: Send + Sync {
    /// Returns `Ok(true)` if `secret` matches a known-breached value.
    async fn is_breached(&self, secret: &str) -> Result<bool, CheckError>;
}

// ---------------------------------------------------------------------------
// Local corpus
// ---------------------------------------------------------------------------

/// Local breach corpus keyed by BLAKE3 fingerprint.
///
/// Plaintext is hashed on insertion and never retained.
#[derive(Debug, Clone, Default)]
pub struct KnownBreachList {
    fingerprints: HashSet<Fingerprint>,
}

impl KnownBreachList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from plaintext breached secrets.
    #[must_use]
    pub fn from_secrets<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fingerprints: secrets
                .into_iter()
                .map(|s| fingerprint(s.as_ref()))
                .collect(),
        }
    }

    /// Corpus seeded with the built-in common password list.
    #[must_use]
    pub fn with_common_passwords() -> Self {
        Self::from_secrets(COMMON_PASSWORDS)
    }

    /// Load a corpus file: one breached secret per line. Blank lines and
    /// lines starting with `#` are skipped. Both `\n` and `\r\n` line
    /// endings are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Io`] if the file cannot be read.
    pub async fn load(path: &Path) -> Result<Self, AuditError> {
        let contents = tokio::fs::read_to_string(path).await?;
        let list = Self::from_secrets(
            contents
                .lines()
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        tracing::debug!(path = %path.display(), entries = list.len(), "Loaded breach corpus");
        Ok(list)
    }

    pub fn insert(&mut self, secret: &str) {
        self.fingerprints.insert(fingerprint(secret));
    }

    #[must_use]
    pub fn contains(&self, secret: &str) -> bool {
        self.fingerprints.contains(&fingerprint(secret))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}

#[async_trait]
impl BreachChecker for KnownBreachList {
    async fn is_breached(&self, secret: &str) -> Result<bool, CheckError> {
        Ok(self.contains(secret))
    }
}
