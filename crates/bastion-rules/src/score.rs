//! Vault health score.
//!
//! `score = clamp(100 - (c·Wc + w·Ww + r·Wr) / total, 0, 100)` with integer
//! division. An empty vault scores 100. With the default weights a vault
//! where every password is compromised, weak, and reused scores 0.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Best possible health score.
pub const MAX_SCORE: u32 = 100;

/// Per-issue penalty weights. Compromised must outweigh weak, which must
/// outweigh reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    #[serde(default = "default_compromised")]
    pub compromised: u32,
    #[serde(default = "default_weak")]
    pub weak: u32,
    #[serde(default = "default_reused")]
    pub reused: u32,
}

const fn default_compromised() -> u32 {
    50
}
const fn default_weak() -> u32 {
    30
}
const fn default_reused() -> u32 {
    20
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            compromised: default_compromised(),
            weak: default_weak(),
            reused: default_reused(),
        }
    }
}

impl ScoreWeights {
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidWeights`] unless
    /// `compromised > weak > reused > 0`.
    pub fn new(compromised: u32, weak: u32, reused: u32) -> Result<Self, RulesError> {
        let weights = Self {
            compromised,
            weak,
            reused,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check the ordering invariant on weights built through serde.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidWeights`] on violation.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.reused == 0 || self.weak <= self.reused || self.compromised <= self.weak {
            return Err(RulesError::InvalidWeights(format!(
                "expected compromised > weak > reused > 0, got {}/{}/{}",
                self.compromised, self.weak, self.reused
            )));
        }
        Ok(())
    }
}

/// Compute the 0–100 health score for a batch of `total` passwords.
#[must_use]
pub fn health_score(
    total: usize,
    compromised: usize,
    weak: usize,
    reused: usize,
    weights: ScoreWeights,
) -> u32 {
    if total == 0 {
        return MAX_SCORE;
    }

    let weighted = |count: usize, weight: u32| (count as u64).saturating_mul(u64::from(weight));
    let penalty = weighted(compromised, weights.compromised)
        .saturating_add(weighted(weak, weights.weak))
        .saturating_add(weighted(reused, weights.reused))
        .checked_div(total as u64)
        .unwrap_or(0);

    let penalty = u32::try_from(penalty).unwrap_or(u32::MAX);
    MAX_SCORE.saturating_sub(penalty)
}
