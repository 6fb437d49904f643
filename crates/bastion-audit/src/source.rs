//! Credential sources.
//!
//! The audit never owns credential storage. A [`CredentialSource`] hands
//! over the full batch for one scan and is otherwise read-only.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bastion_rules::Credential;

use crate::error::AuditError;
use crate::ingest::{ensure_unique_ids, parse_credentials};

/// Read-only access to every stored credential.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Fetch the complete batch for one scan.
    ///
    /// # Errors
    ///
    /// Implementations return [`AuditError::InputUnavailable`] when the
    /// backing store cannot be read.
    async fn get_all_credentials(&self) -> Result<Vec<Credential>, AuditError>;
}

/// In-memory batch, mainly for tests and callers that already hold the
/// decrypted records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Credential>,
}

impl StaticSource {
    /// # Errors
    ///
    /// Returns [`AuditError::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<Credential>) -> Result<Self, AuditError> {
        ensure_unique_ids(&records)?;
        Ok(Self { records })
    }
}

#[async_trait]
impl CredentialSource for StaticSource {
    async fn get_all_credentials(&self) -> Result<Vec<Credential>, AuditError> {
        Ok(self.records.clone())
    }
}

/// JSON export on disk: an array of password API records.
///
/// A file that cannot be read or parsed as a whole is reported as
/// [`AuditError::InputUnavailable`].
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CredentialSource for JsonFileSource {
    async fn get_all_credentials(&self) -> Result<Vec<Credential>, AuditError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AuditError::InputUnavailable(format!("{}: {e}", self.path.display()))
        })?;
        parse_credentials(&contents).map_err(|e| match e {
            AuditError::InvalidPayload(reason) => {
                AuditError::InputUnavailable(format!("{}: {reason}", self.path.display()))
            }
            other => other,
        })
    }
}
