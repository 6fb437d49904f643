//! Password age classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Default age (days) before a password draws a warning.
pub const AGE_WARNING_DAYS: u64 = 180;

/// Default age (days) before a password is considered dangerous.
pub const AGE_DANGER_DAYS: u64 = 365;

/// Severity for password age warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgeSeverity {
    Warning,
    Danger,
}

impl AgeSeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Age of a password that crossed one of the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordAge {
    pub days_since_change: u64,
    pub severity: AgeSeverity,
}

/// Warning and danger thresholds, in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    warning_days: u64,
    danger_days: u64,
}

impl AgePolicy {
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidAgePolicy`] unless `0 < warning < danger`.
    pub fn new(warning_days: u64, danger_days: u64) -> Result<Self, RulesError> {
        if warning_days == 0 || warning_days >= danger_days {
            return Err(RulesError::InvalidAgePolicy {
                warning_days,
                danger_days,
            });
        }
        Ok(Self {
            warning_days,
            danger_days,
        })
    }

    #[must_use]
    pub const fn warning_days(self) -> u64 {
        self.warning_days
    }

    #[must_use]
    pub const fn danger_days(self) -> u64 {
        self.danger_days
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            warning_days: AGE_WARNING_DAYS,
            danger_days: AGE_DANGER_DAYS,
        }
    }
}

/// Classify a password last changed at `changed_at`, as seen at `now`.
///
/// Returns `None` while the password is younger than the warning
/// threshold. Timestamps in the future count as zero days old.
#[must_use]
pub fn classify_age(
    changed_at: DateTime<Utc>,
    now: DateTime<Utc>,
    policy: AgePolicy,
) -> Option<PasswordAge> {
    let days = u64::try_from(now.signed_duration_since(changed_at).num_days()).unwrap_or(0);

    let severity = if days >= policy.danger_days {
        AgeSeverity::Danger
    } else if days >= policy.warning_days {
        AgeSeverity::Warning
    } else {
        return None;
    };

    Some(PasswordAge {
        days_since_change: days,
        severity,
    })
}
