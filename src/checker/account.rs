use serde::Serialize;

use crate::api::types::EligibilityResult;

/// Terminal state of one account's check. Keeping the failure modes apart
/// lets the summary report "no allocation" separately from "could not check",
/// even though both contribute 0 to the batch sums.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Authenticated and the service returned an allocation record.
    Eligible(EligibilityResult),
    /// Authenticated but the eligibility endpoint had no record.
    NotEligible,
    /// The token endpoint rejected the signature or returned an empty token.
    AuthRejected,
    /// The private key could not be parsed.
    InvalidKey(String),
    /// Transport or signing error somewhere in the pipeline.
    Failed(String),
}

impl CheckOutcome {
    pub fn eligibility(&self) -> Option<&EligibilityResult> {
        match self {
            CheckOutcome::Eligible(result) => Some(result),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::Eligible(_) => "eligible",
            CheckOutcome::NotEligible => "not eligible",
            CheckOutcome::AuthRejected => "auth rejected",
            CheckOutcome::InvalidKey(_) => "invalid key",
            CheckOutcome::Failed(_) => "failed",
        }
    }
}

/// One account's slot in the batch, in input order. `address` is None only
/// when the key never parsed.
#[derive(Debug, Clone, Serialize)]
pub struct AccountReport {
    pub index: usize,
    pub address: Option<String>,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}
