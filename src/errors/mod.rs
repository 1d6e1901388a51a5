use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalletError>;

/// Error type shared across the wallet tracker.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sui RPC error: {0}")]
    Rpc(String),

    #[error("Price API error: {0}")]
    PriceApi(String),

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WalletError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn rpc(msg: impl Into<String>) -> Self {
        Self::Rpc(msg.into())
    }

    pub fn price_api(msg: impl Into<String>) -> Self {
        Self::PriceApi(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }
}
