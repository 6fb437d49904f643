//! Security report returned by a scan.
//!
//! The report is an immutable value holding counts, secret-free
//! credential summaries, and the health score. It is rebuilt from scratch
//! on every analysis.

use std::fmt;
use std::str::FromStr;

use bastion_rules::{AgeSeverity, CredentialId, CredentialSummary, ReusedGroup};
use serde::{Deserialize, Serialize};

use crate::error::AuditError;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A credential whose password has not changed in a long time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OldPassword {
    pub id: CredentialId,
    pub platform: String,
    pub days_since_change: u64,
    pub severity: AgeSeverity,
}

/// A credential whose breach check could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnverifiedPassword {
    pub id: CredentialId,
    pub platform: String,
    pub reason: String,
}

/// Soft failures kept apart from real results, so "verified safe" and
/// "could not verify" never look the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub unverified_count: usize,
    pub unverified: Vec<UnverifiedPassword>,
    /// Records with an empty secret. Counted as weak, never checked.
    pub invalid_count: usize,
    pub invalid: Vec<CredentialSummary>,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Complete password security analysis result.
///
/// `strong_count + medium_count + weak_count == total_passwords` always
/// holds. Compromised, reused and old are overlay flags: one record may
/// appear in several lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_passwords: usize,

    pub strong_count: usize,
    pub medium_count: usize,
    pub weak_count: usize,
    pub weak_passwords: Vec<CredentialSummary>,

    pub compromised_count: usize,
    pub compromised_passwords: Vec<CredentialSummary>,

    /// Every credential sharing its password with another one.
    pub reused_count: usize,
    pub reused_passwords: Vec<CredentialSummary>,
    pub reused_groups: Vec<ReusedGroup>,

    pub old_count: usize,
    pub old_passwords: Vec<OldPassword>,

    /// Overall vault health (0–100).
    pub health_score: u32,

    pub diagnostics: Diagnostics,
}

impl Report {
    /// Report for an empty vault.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_passwords: 0,
            strong_count: 0,
            medium_count: 0,
            weak_count: 0,
            weak_passwords: Vec::new(),
            compromised_count: 0,
            compromised_passwords: Vec::new(),
            reused_count: 0,
            reused_passwords: Vec::new(),
            reused_groups: Vec::new(),
            old_count: 0,
            old_passwords: Vec::new(),
            health_score: 100,
            diagnostics: Diagnostics {
                unverified_count: 0,
                unverified: Vec::new(),
                invalid_count: 0,
                invalid: Vec::new(),
            },
        }
    }

    /// Count for one category.
    #[must_use]
    pub const fn count(&self, category: SecurityCategory) -> usize {
        match category {
            SecurityCategory::Compromised => self.compromised_count,
            SecurityCategory::Weak => self.weak_count,
            SecurityCategory::Reused => self.reused_count,
            SecurityCategory::Old => self.old_count,
        }
    }

    /// Credentials flagged under `category`, in input order.
    #[must_use]
    pub fn flagged(&self, category: SecurityCategory) -> Vec<CredentialSummary> {
        match category {
            SecurityCategory::Compromised => self.compromised_passwords.clone(),
            SecurityCategory::Weak => self.weak_passwords.clone(),
            SecurityCategory::Reused => self.reused_passwords.clone(),
            SecurityCategory::Old => self
                .old_passwords
                .iter()
                .map(|o| CredentialSummary {
                    id: o.id.clone(),
                    platform: o.platform.clone(),
                })
                .collect(),
        }
    }

    /// One alert per non-empty category, most severe first.
    #[must_use]
    pub fn alerts(&self) -> Vec<SecurityAlert> {
        SecurityCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let count = self.count(category);
                let lead = self.flagged(category).into_iter().next()?.platform;
                Some(SecurityAlert {
                    category,
                    count,
                    lead,
                })
            })
            .collect()
    }

    /// `true` if no category has any flagged credential.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.compromised_count == 0
            && self.weak_count == 0
            && self.reused_count == 0
            && self.old_count == 0
    }
}

// ---------------------------------------------------------------------------
// Categories & alerts
// ---------------------------------------------------------------------------

/// Review filter offered by the security dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecurityCategory {
    Compromised,
    Weak,
    Reused,
    Old,
}

impl SecurityCategory {
    /// All categories, most severe first.
    pub const ALL: [Self; 4] = [Self::Compromised, Self::Weak, Self::Reused, Self::Old];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compromised => "compromised",
            Self::Weak => "weak",
            Self::Reused => "reused",
            Self::Old => "old",
        }
    }
}

impl fmt::Display for SecurityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityCategory {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compromised" => Ok(Self::Compromised),
            "weak" => Ok(Self::Weak),
            "reused" => Ok(Self::Reused),
            "old" => Ok(Self::Old),
            _ => Err(AuditError::UnknownCategory(s.to_string())),
        }
    }
}

/// Headline for one dashboard alert card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    pub category: SecurityCategory,
    pub count: usize,
    /// Platform of the first flagged credential.
    pub lead: String,
}

impl SecurityAlert {
    /// How many flagged credentials besides [`Self::lead`].
    #[must_use]
    pub const fn others(&self) -> usize {
        self.count.saturating_sub(1)
    }
}

impl fmt::Display for SecurityAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "password" } else { "passwords" };
        write!(f, "{} {} {noun}: '{}'", self.count, self.category, self.lead)?;
        match self.others() {
            0 => Ok(()),
            1 => f.write_str(" and 1 other"),
            n => write!(f, " and {n} others"),
        }
    }
}
