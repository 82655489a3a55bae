pub mod auth;
pub mod eligibility;
pub mod types;

pub use auth::AuthClient;
pub use eligibility::EligibilityClient;
pub use types::{AuthChallenge, AuthToken, EligibilityResult};

use crate::error::Result;

/// Default Clusters airdrop API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.clusters.xyz/v0.1/airdrops/pengu";

pub const AUTH_MESSAGE_ENDPOINT: &str = "/auth/message";
pub const AUTH_TOKEN_ENDPOINT: &str = "/auth/token";
pub const ELIGIBILITY_ENDPOINT: &str = "/eligibility";

/// Challenge fetch and token redemption against the airdrop auth endpoints.
///
/// Non-2xx responses from the token endpoint are an application-level
/// rejection (`Ok(None)`), not an error; transport failures propagate.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn fetch_challenge(&self) -> Result<AuthChallenge>;

    async fn redeem_token(
        &self,
        wallet: &str,
        signing_date: &str,
        signature: &str,
    ) -> Result<Option<AuthToken>>;
}

/// Eligibility lookup for a single address. Same non-2xx / transport split
/// as [`AuthApi`].
#[allow(async_fn_in_trait)]
pub trait EligibilityApi {
    async fn check_eligibility(&self, address: &str) -> Result<Option<EligibilityResult>>;
}
