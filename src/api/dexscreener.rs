use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::constants::{DEXSCREENER_PAIRS_URL, HTTP_TIMEOUT_SECS};
use crate::errors::{Result, WalletError};

/// Upstream pair-price lookup consumed by the valuation engine.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_pair(&self) -> Result<PairData>;
}

/// DexScreener pair endpoint client, pinned to one pool address.
pub struct DexScreenerClient {
    client: Client,
    base_url: String,
    pair_address: String,
}

/// Pair lookup response envelope. DexScreener returns the same pair both as
/// a single object and as a one-element list.
#[derive(Debug, Clone, Deserialize)]
pub struct PairResponse {
    pub pair: Option<PairData>,
    pub pairs: Option<Vec<PairData>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairData {
    pub pair_address: String,
    pub base_token: PairToken,
    pub quote_token: PairToken,
    /// Price of one base token denominated in quote tokens, quoted as a
    /// decimal string.
    pub price_native: String,
    pub price_usd: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

impl DexScreenerClient {
    pub fn new(pair_address: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEXSCREENER_PAIRS_URL, pair_address)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        pair_address: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            pair_address: pair_address.into(),
        })
    }
}

#[async_trait]
impl PriceSource for DexScreenerClient {
    async fn fetch_pair(&self) -> Result<PairData> {
        let url = format!("{}/{}", self.base_url, self.pair_address);
        debug!("Fetching SUI price from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(WalletError::price_api(format!(
                "DexScreener request failed with status {}",
                response.status()
            )));
        }

        let body: PairResponse = response
            .json()
            .await
            .map_err(|e| WalletError::parse(format!("Invalid DexScreener response: {}", e)))?;

        body.pair
            .or_else(|| {
                body.pairs.and_then(|mut pairs| {
                    if pairs.is_empty() {
                        None
                    } else {
                        Some(pairs.remove(0))
                    }
                })
            })
            .ok_or_else(|| WalletError::parse("DexScreener response contains no pair data"))
    }
}
