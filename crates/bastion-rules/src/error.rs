//! Rule configuration error types for `bastion-rules`.

use thiserror::Error;

/// Errors produced when a rule policy is constructed with invalid values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    /// Score weights must rank compromised above weak above reused.
    #[error("invalid score weights: {0}")]
    InvalidWeights(String),

    /// Age thresholds must satisfy `0 < warning < danger`.
    #[error("invalid age policy: warning {warning_days}d, danger {danger_days}d")]
    InvalidAgePolicy {
        /// Days before a password is reported with a warning.
        warning_days: u64,
        /// Days before a password is reported as dangerous.
        danger_days: u64,
    },
}
