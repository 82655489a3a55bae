use chrono::{DateTime, Utc};
use colored::Colorize;
use futures::{stream, StreamExt};
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{AuthApi, EligibilityApi};
use crate::checker::account::{AccountReport, CheckOutcome};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::utils::RateLimiter;
use crate::wallet::WalletAccount;

/// Drives private keys through sign → auth → eligibility and aggregates the
/// batch. Both API clients are injected, so tests can script the remote side.
pub struct EligibilityChecker<A, E> {
    auth: A,
    eligibility: E,
    pacer: RateLimiter,
    max_concurrency: usize,
}

impl<A: AuthApi, E: EligibilityApi> EligibilityChecker<A, E> {
    pub fn new(auth: A, eligibility: E, config: &CheckerConfig) -> Self {
        Self {
            auth,
            eligibility,
            pacer: RateLimiter::new(config.request_delay_ms),
            max_concurrency: config.max_concurrency.max(1),
        }
    }

    /// Check every key with bounded concurrency and aggregate the results in
    /// input order. Always returns a summary, even when every account failed.
    pub async fn check_all(&self, private_keys: &[String]) -> BatchSummary {
        let total = private_keys.len();
        info!("Starting eligibility check for {} private keys", total);

        let progress = ProgressBar::new(total as u64);
        let reports: Vec<AccountReport> = stream::iter(private_keys.iter().enumerate())
            .map(|(index, key)| {
                let progress = &progress;
                async move {
                    let report = self.process_account(key, index, total).await;
                    progress.inc(1);
                    report
                }
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;
        progress.finish_and_clear();

        BatchSummary::from_reports(reports)
    }

    /// Check a single key outside of a batch.
    pub async fn check_one(&self, private_key: &str) -> AccountReport {
        self.process_account(private_key, 0, 1).await
    }

    /// Run one account through the pipeline. Every failure is contained
    /// here; nothing an account does can abort the batch.
    async fn process_account(&self, private_key: &str, index: usize, total: usize) -> AccountReport {
        info!("Checking key {}/{}", index + 1, total);

        let account = match WalletAccount::from_private_key(private_key) {
            Ok(account) => account,
            Err(e) => {
                warn!("Key {}/{}: {}", index + 1, total, e);
                return AccountReport {
                    index,
                    address: None,
                    outcome: CheckOutcome::InvalidKey(e.to_string()),
                };
            }
        };
        let address = account.address();

        let outcome = match self.run_pipeline(&account).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Error processing {}: {}", address, e);
                CheckOutcome::Failed(e.to_string())
            }
        };

        AccountReport {
            index,
            address: Some(address),
            outcome,
        }
    }

    async fn run_pipeline(&self, account: &WalletAccount) -> Result<CheckOutcome> {
        self.pacer.wait().await;

        let challenge = self.auth.fetch_challenge().await?;
        let signature = account.sign_message(&challenge.message).await?;
        let address = account.address();

        let granted = matches!(
            self.auth
                .redeem_token(&address, &challenge.signing_date, &signature)
                .await?,
            Some(token) if token.is_usable()
        );
        if !granted {
            return Ok(CheckOutcome::AuthRejected);
        }

        // The token only gates the check; the eligibility endpoint itself
        // takes the bare address.
        match self.eligibility.check_eligibility(&address).await? {
            Some(result) => {
                info!(
                    "{} - Total: {} - TotalUnclaimed: {}",
                    address, result.total, result.total_unclaimed
                );
                Ok(CheckOutcome::Eligible(result))
            }
            None => Ok(CheckOutcome::NotEligible),
        }
    }
}

/// Aggregate over one batch run. Sums only count eligible accounts; every
/// other outcome contributes 0 but still shows up in its counter.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub eligible: usize,
    pub not_eligible: usize,
    pub auth_rejected: usize,
    pub invalid_keys: usize,
    pub failed: usize,
    pub total_amount: f64,
    pub total_unclaimed: f64,
    pub completed_at: DateTime<Utc>,
    pub reports: Vec<AccountReport>,
}

impl BatchSummary {
    pub fn from_reports(reports: Vec<AccountReport>) -> Self {
        let mut summary = Self {
            processed: reports.len(),
            eligible: 0,
            not_eligible: 0,
            auth_rejected: 0,
            invalid_keys: 0,
            failed: 0,
            total_amount: 0.0,
            total_unclaimed: 0.0,
            completed_at: Utc::now(),
            reports: Vec::new(),
        };

        for report in &reports {
            match &report.outcome {
                CheckOutcome::Eligible(result) => {
                    summary.eligible += 1;
                    summary.total_amount += result.total;
                    summary.total_unclaimed += result.total_unclaimed;
                }
                CheckOutcome::NotEligible => summary.not_eligible += 1,
                CheckOutcome::AuthRejected => summary.auth_rejected += 1,
                CheckOutcome::InvalidKey(_) => summary.invalid_keys += 1,
                CheckOutcome::Failed(_) => summary.failed += 1,
            }
        }

        summary.reports = reports;
        summary
    }

    /// Print the final summary block to the console.
    pub fn print_summary(&self) {
        println!("\n{}", "=== Final Summary ===".cyan().bold());
        println!("Total keys processed: {}", self.processed);
        println!("Total amount available: {}", self.total_amount);
        println!("Total unclaimed amount: {}", self.total_unclaimed);
        println!("\nOutcomes:");
        println!("  Eligible:      {}", self.eligible.to_string().green());
        println!("  Not eligible:  {}", self.not_eligible);
        println!("  Auth rejected: {}", self.auth_rejected.to_string().yellow());
        println!("  Invalid keys:  {}", self.invalid_keys.to_string().yellow());
        println!("  Errors:        {}", self.failed.to_string().red());
        println!(
            "Completed: {}",
            crate::utils::format_timestamp(&self.completed_at)
        );
    }
}
