use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::{DEFAULT_REDIS_URL, DEFAULT_SUI_RPC_URL, DEFAULT_SUI_USDC_PAIR};
use crate::errors::WalletError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wallet whose balance is valued.
    pub wallet_address: String,

    // Endpoints
    pub sui_rpc_url: String,
    pub redis_url: String,
    pub pair_address: String,

    /// Name printed on the first line of the portfolio report.
    pub display_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            wallet_address: env::var("SUI_WALLET_ADDRESS")
                .map_err(|_| WalletError::Config("SUI_WALLET_ADDRESS not set".into()))?,
            sui_rpc_url: env::var("SUI_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_SUI_RPC_URL.to_string()),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
            pair_address: env::var("SUI_USDC_PAIR_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SUI_USDC_PAIR.to_string()),
            display_name: env::var("DISPLAY_NAME").unwrap_or_else(|_| "Sui Wallet".to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.wallet_address.starts_with("0x") {
            return Err(WalletError::Config("Wallet address must be 0x-prefixed".into()).into());
        }
        if self.wallet_address.len() != 66 {
            return Err(
                WalletError::Config("Wallet address must be 32 bytes of hex".into()).into(),
            );
        }
        if !self.wallet_address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletError::Config(
                "Wallet address contains non-hex characters".into(),
            )
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_address(address: &str) -> Config {
        Config {
            wallet_address: address.to_string(),
            sui_rpc_url: DEFAULT_SUI_RPC_URL.to_string(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            pair_address: DEFAULT_SUI_USDC_PAIR.to_string(),
            display_name: "Sui Wallet".to_string(),
        }
    }

    #[test]
    fn accepts_canonical_address() {
        let address = format!("0x{}", "a1".repeat(32));
        assert!(config_with_address(&address).validate().is_ok());
    }

    #[test]
    fn rejects_bad_addresses() {
        assert!(config_with_address("").validate().is_err());
        assert!(config_with_address("abc123").validate().is_err());
        assert!(config_with_address("0xdeadbeef").validate().is_err());
        let non_hex = format!("0x{}", "zz".repeat(32));
        assert!(config_with_address(&non_hex).validate().is_err());
    }
}
