//! `bastion-rules` — Pure password classification rules for BASTION.
//!
//! This crate holds everything that can be decided from the credentials
//! alone: strength tiers, reuse detection, password age, and the health
//! score policy. Zero network, zero async, zero filesystem access.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod credential;

pub mod common;
pub mod strength;

pub mod reuse;

pub mod age;

pub mod score;

pub use age::{classify_age, AgePolicy, AgeSeverity, PasswordAge};
pub use common::is_common_password;
pub use credential::{Credential, CredentialId, CredentialSummary, SecretValue};
pub use error::RulesError;
pub use reuse::{
    detect_reused, find_reused_groups, fingerprint, reused_flags, Fingerprint, ReusedGroup,
};
pub use score::{health_score, ScoreWeights};
pub use strength::{char_classes, classify_strength, CharClass, CharClasses, Strength};
