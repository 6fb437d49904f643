//! `bastion-audit` — Password security audit for BASTION.
//!
//! Turns a batch of stored credentials into a [`Report`]: strength
//! buckets, reused passwords, breach hits, password age, and a single
//! 0–100 health score. The credential store and the breach corpus are
//! injected through the [`CredentialSource`] and [`BreachChecker`] traits.
//!
//! Secrets never leave this crate: reports carry only ids and platform
//! names.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;

pub mod ingest;
pub mod source;

pub mod breach;

pub mod analyzer;
pub mod report;

pub use analyzer::{Analyzer, Scan};
pub use breach::{BreachChecker, CheckError, CheckOutcome, KnownBreachList};
pub use config::AuditConfig;
pub use error::AuditError;
pub use ingest::{ensure_unique_ids, parse_credentials, RawCredential, RawId};
pub use report::{
    Diagnostics, OldPassword, Report, SecurityAlert, SecurityCategory, UnverifiedPassword,
};
pub use source::{CredentialSource, JsonFileSource, StaticSource};

pub use bastion_rules::{
    classify_strength, detect_reused, Credential, CredentialId, CredentialSummary, ReusedGroup,
    SecretValue, Strength,
};
