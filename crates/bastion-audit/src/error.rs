//! Audit error types for `bastion-audit`.
//!
//! Only failures that abort a whole scan live here. A single breach check
//! that fails is a [`crate::breach::CheckError`] and is recovered inside
//! the analyzer.

use bastion_rules::RulesError;
use thiserror::Error;

/// Errors produced by audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The credential source could not be read.
    #[error("credential source unavailable: {0}")]
    InputUnavailable(String),

    /// A credential payload could not be parsed or validated.
    #[error("invalid credential payload: {0}")]
    InvalidPayload(String),

    /// Two records in the same batch share an id.
    #[error("duplicate credential id: {0}")]
    DuplicateId(String),

    /// Audit configuration is out of range.
    #[error("invalid audit configuration: {0}")]
    Config(String),

    /// A dashboard filter string did not name a known category.
    #[error("unknown security category: {0}")]
    UnknownCategory(String),

    /// Rule policy validation failure (delegated from bastion-rules).
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
