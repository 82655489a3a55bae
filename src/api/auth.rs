use reqwest::Client;
use tracing::debug;

use crate::api::types::{AuthChallenge, AuthToken, TokenRequest};
use crate::api::{AuthApi, AUTH_MESSAGE_ENDPOINT, AUTH_TOKEN_ENDPOINT};
use crate::error::Result;

/// Client for the airdrop auth endpoints.
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

impl AuthApi for AuthClient {
    /// Fetch a fresh challenge message to be signed by the wallet.
    async fn fetch_challenge(&self) -> Result<AuthChallenge> {
        let url = format!("{}{}", self.base_url, AUTH_MESSAGE_ENDPOINT);
        let challenge = self.http.get(url).send().await?.json().await?;
        Ok(challenge)
    }

    /// Exchange a signed challenge for an auth token.
    ///
    /// A non-2xx status means the service rejected the signature; that is
    /// reported as `Ok(None)` so the caller can skip the account without
    /// treating it as a transport failure.
    async fn redeem_token(
        &self,
        wallet: &str,
        signing_date: &str,
        signature: &str,
    ) -> Result<Option<AuthToken>> {
        let url = format!("{}{}", self.base_url, AUTH_TOKEN_ENDPOINT);
        let response = self
            .http
            .post(url)
            .json(&TokenRequest {
                signature,
                signing_date,
                auth_type: "evm",
                wallet,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(
                wallet,
                status = %response.status(),
                "token endpoint rejected signature"
            );
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}
