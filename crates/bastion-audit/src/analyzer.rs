//! Password security analysis (Watchtower-style).
//!
//! [`Analyzer::analyze`] is pure apart from the injected breach checker:
//! it borrows the batch, never mutates it, and returns a fresh [`Report`].
//! Breach checks fan out concurrently but results are merged back in
//! input order, so identical input always yields an identical report.

use std::sync::Arc;

use bastion_rules::{
    classify_age, classify_strength, find_reused_groups, health_score, reused_flags, AgePolicy,
    Credential, Strength,
};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use crate::breach::{BreachChecker, CheckError, CheckOutcome};
use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::ingest::ensure_unique_ids;
use crate::report::{Diagnostics, OldPassword, Report, UnverifiedPassword};
use crate::source::CredentialSource;

/// A report together with the moment it was produced.
#[derive(Debug, Clone)]
pub struct Scan {
    pub report: Report,
    pub scanned_at: DateTime<Utc>,
}

/// Builds security reports from credential batches.
pub struct Analyzer {
    checker: Arc<dyn BreachChecker>,
    config: AuditConfig,
    age_policy: AgePolicy,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// # Errors
    ///
    /// Returns [`AuditError::Config`] or [`AuditError::Rules`] if `config`
    /// does not validate.
    pub fn new(checker: Arc<dyn BreachChecker>, config: AuditConfig) -> Result<Self, AuditError> {
        config.validate()?;
        let age_policy = config.age_policy()?;
        Ok(Self {
            checker,
            config,
            age_policy,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Fetch the batch from `source` and analyze it.
    ///
    /// # Errors
    ///
    /// Fails only if the source cannot be read or hands back a batch with
    /// duplicate ids. Individual breach check failures never fail a scan.
    pub async fn scan(&self, source: &dyn CredentialSource) -> Result<Scan, AuditError> {
        let records = source.get_all_credentials().await?;
        ensure_unique_ids(&records)?;

        let scanned_at = Utc::now();
        let report = self.analyze_at(&records, scanned_at).await;
        Ok(Scan { report, scanned_at })
    }

    /// Analyze `records` as of now.
    pub async fn analyze(&self, records: &[Credential]) -> Report {
        self.analyze_at(records, Utc::now()).await
    }

    /// Analyze `records` as of `now`. `now` only affects password age.
    pub async fn analyze_at(&self, records: &[Credential], now: DateTime<Utc>) -> Report {
        if records.is_empty() {
            return Report::empty();
        }

        tracing::debug!(total = records.len(), "Analyzing credentials");

        let reused = reused_flags(records);
        let reused_groups = find_reused_groups(records);
        let outcomes = self.check_all(records).await;

        let mut report = Report {
            total_passwords: records.len(),
            reused_groups,
            ..Report::empty()
        };
        let mut diagnostics = Diagnostics::default();

        for ((record, outcome), is_reused) in records.iter().zip(outcomes).zip(reused) {
            let summary = record.summary();

            match classify_strength(record.secret.expose()) {
                Strength::Strong => report.strong_count = report.strong_count.saturating_add(1),
                Strength::Medium => report.medium_count = report.medium_count.saturating_add(1),
                Strength::Weak => report.weak_passwords.push(summary.clone()),
            }

            if !record.is_classifiable() {
                diagnostics.invalid.push(summary.clone());
            }

            if is_reused {
                report.reused_passwords.push(summary.clone());
            }

            match outcome {
                CheckOutcome::Breached => report.compromised_passwords.push(summary.clone()),
                CheckOutcome::Unknown(err) => diagnostics.unverified.push(UnverifiedPassword {
                    id: record.id.clone(),
                    platform: record.platform.clone(),
                    reason: err.to_string(),
                }),
                CheckOutcome::Clean | CheckOutcome::Skipped => {}
            }

            if let Some(age) = record
                .changed_at()
                .and_then(|at| classify_age(at, now, self.age_policy))
            {
                report.old_passwords.push(OldPassword {
                    id: summary.id,
                    platform: summary.platform,
                    days_since_change: age.days_since_change,
                    severity: age.severity,
                });
            }
        }

        report.weak_count = report.weak_passwords.len();
        report.compromised_count = report.compromised_passwords.len();
        report.reused_count = report.reused_passwords.len();
        report.old_count = report.old_passwords.len();
        diagnostics.unverified_count = diagnostics.unverified.len();
        diagnostics.invalid_count = diagnostics.invalid.len();
        report.diagnostics = diagnostics;

        report.health_score = health_score(
            report.total_passwords,
            report.compromised_count,
            report.weak_count,
            report.reused_count,
            self.config.weights,
        );

        tracing::info!(
            total = report.total_passwords,
            weak = report.weak_count,
            compromised = report.compromised_count,
            reused = report.reused_count,
            old = report.old_count,
            unverified = report.diagnostics.unverified_count,
            score = report.health_score,
            "Password analysis complete"
        );

        report
    }

    /// Run every breach check with bounded concurrency. The returned
    /// outcomes line up index-for-index with `records`.
    async fn check_all(&self, records: &[Credential]) -> Vec<CheckOutcome> {
        let limit = self.config.max_concurrent_checks.max(1);
        stream::iter(records.iter().map(|record| self.check_one(record)))
            .buffered(limit)
            .collect::<Vec<_>>()
            .await
    }

    async fn check_one(&self, record: &Credential) -> CheckOutcome {
        if !record.is_classifiable() {
            return CheckOutcome::Skipped;
        }

        let timeout = self.config.check_timeout();
        let result =
            tokio::time::timeout(timeout, self.checker.is_breached(record.secret.expose())).await;

        let err = match result {
            Ok(Ok(true)) => return CheckOutcome::Breached,
            Ok(Ok(false)) => return CheckOutcome::Clean,
            Ok(Err(err)) => err,
            Err(_) => CheckError::TimedOut(timeout),
        };

        tracing::warn!(
            credential_id = %record.id,
            platform = %record.platform,
            "Breach check failed, leaving credential unverified: {err}"
        );
        CheckOutcome::Unknown(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
