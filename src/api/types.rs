use serde::{Deserialize, Deserializer, Serialize};

/// Server-issued challenge a wallet must sign to prove key ownership.
///
/// `signing_date` is passed back to the token endpoint verbatim, so it is
/// kept as the raw string rather than a parsed timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthChallenge {
    pub message: String,
    pub signing_date: String,
}

/// Short-lived credential granted after signature verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub token: String,
}

impl AuthToken {
    /// The token gates the eligibility check; an empty one is as good as none.
    pub fn is_usable(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Body for the token endpoint. `auth_type` is always `"evm"`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest<'a> {
    pub signature: &'a str,
    pub signing_date: &'a str,
    #[serde(rename = "type")]
    pub auth_type: &'a str,
    pub wallet: &'a str,
}

/// Per-address airdrop allocation. Missing or unparsable amounts count as 0
/// so a single malformed field cannot poison the batch sums.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_unclaimed: f64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_parses_plain_numbers() {
        let result: EligibilityResult =
            serde_json::from_str(r#"{"total": 100, "totalUnclaimed": 40}"#).unwrap();
        assert_eq!(result.total, 100.0);
        assert_eq!(result.total_unclaimed, 40.0);
    }

    #[test]
    fn eligibility_tolerates_string_and_missing_fields() {
        let result: EligibilityResult =
            serde_json::from_str(r#"{"total": "12.5"}"#).unwrap();
        assert_eq!(result.total, 12.5);
        assert_eq!(result.total_unclaimed, 0.0);

        let result: EligibilityResult = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.total, 0.0);
        assert_eq!(result.total_unclaimed, 0.0);
    }

    #[test]
    fn eligibility_treats_garbage_as_zero() {
        let result: EligibilityResult =
            serde_json::from_str(r#"{"total": null, "totalUnclaimed": {"x": 1}}"#).unwrap();
        assert_eq!(result.total, 0.0);
        assert_eq!(result.total_unclaimed, 0.0);
    }

    #[test]
    fn empty_token_is_not_usable() {
        let token: AuthToken = serde_json::from_str(r#"{"isValid": true}"#).unwrap();
        assert!(!token.is_usable());

        let token: AuthToken =
            serde_json::from_str(r#"{"isValid": true, "token": "abc"}"#).unwrap();
        assert!(token.is_usable());
    }

    #[test]
    fn token_request_uses_api_field_names() {
        let request = TokenRequest {
            signature: "0xsig",
            signing_date: "2026-01-01T00:00:00Z",
            auth_type: "evm",
            wallet: "0xwallet",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["signature"], "0xsig");
        assert_eq!(value["signingDate"], "2026-01-01T00:00:00Z");
        assert_eq!(value["type"], "evm");
        assert_eq!(value["wallet"], "0xwallet");
    }
}
