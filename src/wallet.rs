use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;

use crate::error::{CheckerError, Result};

/// Prepend the `0x` prefix when missing. Keys arrive from user-supplied
/// files in both forms; derivation must not depend on which one.
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("0x") {
        trimmed.to_string()
    } else {
        format!("0x{trimmed}")
    }
}

/// An EVM account derived from a private key: checksummed address plus
/// EIP-191 message signing. The key itself never leaves the signer and is
/// never logged.
#[derive(Debug)]
pub struct WalletAccount {
    signer: PrivateKeySigner,
}

impl WalletAccount {
    pub fn from_private_key(raw: &str) -> Result<Self> {
        let key = normalize_key(raw);
        let signer: PrivateKeySigner = key
            .parse()
            // The parse error never echoes key material; neither do we.
            .map_err(|e| CheckerError::InvalidKey(format!("{e}")))?;
        Ok(Self { signer })
    }

    /// EIP-55 checksummed address string.
    pub fn address(&self) -> String {
        self.signer.address().to_string()
    }

    /// Sign a challenge message (EIP-191 personal sign), hex-encoded with
    /// `0x` prefix as the token endpoint expects.
    pub async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self.signer.sign_message(message.as_bytes()).await?;
        Ok(format!("0x{}", alloy::hex::encode(signature.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Address of the well-known private key 0x...001.
    const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const KEY_ONE_ADDRESS: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

    #[test]
    fn normalize_key_adds_prefix_once() {
        assert_eq!(normalize_key("abc123"), "0xabc123");
        assert_eq!(normalize_key("0xabc123"), "0xabc123");
        assert_eq!(normalize_key("  0xabc123\n"), "0xabc123");
    }

    #[test]
    fn prefixed_and_bare_keys_derive_the_same_address() {
        let bare = WalletAccount::from_private_key(KEY_ONE).unwrap();
        let prefixed = WalletAccount::from_private_key(&format!("0x{KEY_ONE}")).unwrap();
        assert_eq!(bare.address(), prefixed.address());
        assert!(bare.address().eq_ignore_ascii_case(KEY_ONE_ADDRESS));
    }

    #[test]
    fn malformed_key_is_a_typed_error() {
        let err = WalletAccount::from_private_key("not-a-key").unwrap_err();
        assert!(matches!(err, CheckerError::InvalidKey(_)));

        let err = WalletAccount::from_private_key("0x1234").unwrap_err();
        assert!(matches!(err, CheckerError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn signature_recovers_to_the_signing_address() {
        let account = WalletAccount::from_private_key(KEY_ONE).unwrap();
        let message = "Sign this message to prove ownership";

        let hex_sig = account.sign_message(message).await.unwrap();
        assert!(hex_sig.starts_with("0x"));
        // 65 signature bytes hex-encoded.
        assert_eq!(hex_sig.len(), 2 + 65 * 2);

        let bytes = alloy::hex::decode(&hex_sig).unwrap();
        let signature = alloy::primitives::Signature::from_raw(&bytes).unwrap();
        let recovered = signature
            .recover_address_from_msg(message.as_bytes())
            .unwrap();
        assert_eq!(recovered.to_string(), account.address());
    }
}
