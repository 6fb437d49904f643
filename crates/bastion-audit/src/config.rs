//! Audit configuration, stored as plain JSON next to the vault.
//!
//! Nothing in here is sensitive. A missing or corrupt file falls back to
//! [`AuditConfig::default`] so a scan can always run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use bastion_rules::age::{AGE_DANGER_DAYS, AGE_WARNING_DAYS};
use bastion_rules::{AgePolicy, ScoreWeights};
use serde::{Deserialize, Serialize};

use crate::error::AuditError;

// ── Audit configuration ────────────────────────────────────────────

/// Tunables for a password security scan.
///
/// Persisted to `{dir}/audit.json`. All fields have defaults via
/// [`Default`], so partial files are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    /// Milliseconds a single breach check may take before it is treated
    /// as unavailable.
    #[serde(default = "default_check_timeout_ms")]
    pub check_timeout_ms: u64,

    /// Maximum breach checks in flight at once.
    #[serde(default = "default_max_concurrent_checks")]
    pub max_concurrent_checks: usize,

    /// Health score penalty weights.
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Days since the last change before a password draws a warning.
    #[serde(default = "default_age_warning_days")]
    pub age_warning_days: u64,

    /// Days since the last change before a password is dangerous.
    #[serde(default = "default_age_danger_days")]
    pub age_danger_days: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            check_timeout_ms: default_check_timeout_ms(),
            max_concurrent_checks: default_max_concurrent_checks(),
            weights: ScoreWeights::default(),
            age_warning_days: default_age_warning_days(),
            age_danger_days: default_age_danger_days(),
        }
    }
}

const fn default_check_timeout_ms() -> u64 {
    3_000
}
const fn default_max_concurrent_checks() -> usize {
    8
}
const fn default_age_warning_days() -> u64 {
    AGE_WARNING_DAYS
}
const fn default_age_danger_days() -> u64 {
    AGE_DANGER_DAYS
}

impl AuditConfig {
    /// Per-check timeout as a [`Duration`].
    #[must_use]
    pub const fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }

    /// Age thresholds as a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Rules`] unless `0 < warning < danger`.
    pub fn age_policy(&self) -> Result<AgePolicy, AuditError> {
        Ok(AgePolicy::new(self.age_warning_days, self.age_danger_days)?)
    }

    /// Reject values no scan can run with.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Config`] for a zero timeout or concurrency,
    /// and [`AuditError::Rules`] for mis-ordered weights or age thresholds.
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.check_timeout_ms == 0 {
            return Err(AuditError::Config("checkTimeoutMs must be positive".into()));
        }
        if self.max_concurrent_checks == 0 {
            return Err(AuditError::Config(
                "maxConcurrentChecks must be positive".into(),
            ));
        }
        self.weights.validate()?;
        self.age_policy()?;
        Ok(())
    }
}

// ── File I/O ───────────────────────────────────────────────────────

const CONFIG_FILE: &str = "audit.json";

impl AuditConfig {
    /// Load configuration from `{dir}/audit.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing or
    /// contains invalid JSON.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "Corrupt audit config, using defaults: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist configuration to `{dir}/audit.json`.
    ///
    /// Writes to a `.tmp` sibling first, then renames it into place.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Io`] if the directory does not exist or the
    /// file system rejects the write/rename.
    pub fn save(&self, dir: &Path) -> Result<(), AuditError> {
        let path = dir.join(CONFIG_FILE);
        let tmp = dir.join(".audit.json.tmp");

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(&tmp, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────
