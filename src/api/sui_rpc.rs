use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::constants::HTTP_TIMEOUT_SECS;
use crate::errors::{Result, WalletError};

/// On-chain balance lookup consumed by the valuation engine.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn get_balance(&self, address: &str) -> Result<CoinBalance>;
}

/// Sui fullnode JSON-RPC client.
pub struct SuiRpcClient {
    client: Client,
    rpc_url: String,
}

/// `suix_getBalance` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    pub coin_type: String,
    pub coin_object_count: u64,
    /// Total balance in MIST, quoted as a decimal-integer string.
    pub total_balance: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl SuiRpcClient {
    pub fn new(rpc_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }
}

#[async_trait]
impl BalanceSource for SuiRpcClient {
    async fn get_balance(&self, address: &str) -> Result<CoinBalance> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "suix_getBalance",
            "params": [address]
        });

        debug!("Fetching SUI balance for {}", address);
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(WalletError::rpc(format!(
                "RPC request failed: {}",
                response.status()
            )));
        }

        let body: RpcResponse<CoinBalance> = response
            .json()
            .await
            .map_err(|e| WalletError::parse(format!("Invalid RPC response: {}", e)))?;

        if let Some(err) = body.error {
            return Err(WalletError::rpc(format!("{} (code {})", err.message, err.code)));
        }
        body.result
            .ok_or_else(|| WalletError::parse("RPC response missing result"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_balance_result() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "coinType": "0x2::sui::SUI",
                "coinObjectCount": 3,
                "totalBalance": "5000000000",
                "lockedBalance": {}
            }
        }"#;
        let body: RpcResponse<CoinBalance> = serde_json::from_str(raw).unwrap();
        let balance = body.result.unwrap();
        assert_eq!(balance.total_balance, "5000000000");
        assert_eq!(balance.coin_object_count, 3);
    }

    #[test]
    fn decodes_rpc_error_body() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid params"}
        }"#;
        let body: RpcResponse<CoinBalance> = serde_json::from_str(raw).unwrap();
        assert!(body.result.is_none());
        let err = body.error.unwrap();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Invalid params");
    }
}
