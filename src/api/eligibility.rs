use reqwest::Client;
use tracing::debug;

use crate::api::types::EligibilityResult;
use crate::api::{EligibilityApi, ELIGIBILITY_ENDPOINT};
use crate::error::Result;

/// Client for the airdrop eligibility endpoint.
pub struct EligibilityClient {
    http: Client,
    base_url: String,
}

impl EligibilityClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

impl EligibilityApi for EligibilityClient {
    /// Query the allocation for one address.
    ///
    /// The endpoint takes a single-element address array. Non-2xx means the
    /// address has no allocation record; reported as `Ok(None)`.
    async fn check_eligibility(&self, address: &str) -> Result<Option<EligibilityResult>> {
        let url = format!("{}{}", self.base_url, ELIGIBILITY_ENDPOINT);
        let response = self.http.post(url).json(&[address]).send().await?;

        if !response.status().is_success() {
            debug!(
                address,
                status = %response.status(),
                "eligibility endpoint returned no allocation"
            );
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}
