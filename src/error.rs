use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Signing failed: {0}")]
    Signer(#[from] alloy::signers::Error),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
