use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::api::{BalanceSource, PriceSource};
use crate::cache::TieredCache;
use crate::constants::{MIST_PER_SUI, PORTFOLIO_KEY_PREFIX, PRICES_CACHE_KEY};
use crate::errors::{Result, WalletError};
use crate::utils::formatting::{format_portfolio, UNAVAILABLE_MESSAGE};
use crate::utils::retry::{retry_with_backoff, RetryConfig};

use super::types::{Portfolio, PricePoint};

/// Produces cached USD valuations of a wallet's SUI balance.
///
/// Collaborators are constructed once at startup and injected; the provider
/// holds no per-address state, so overlapping requests for different
/// addresses proceed independently. Concurrent misses on the same key each
/// fetch and write through on their own (no single-flight coalescing).
pub struct WalletProvider {
    price_source: Arc<dyn PriceSource>,
    balance_source: Arc<dyn BalanceSource>,
    cache: Arc<TieredCache>,
    retry: RetryConfig,
}

impl WalletProvider {
    pub fn new(
        price_source: Arc<dyn PriceSource>,
        balance_source: Arc<dyn BalanceSource>,
        cache: Arc<TieredCache>,
    ) -> Self {
        Self {
            price_source,
            balance_source,
            cache,
            retry: RetryConfig::default(),
        }
    }

    /// Current SUI price, cached under the shared `prices` key.
    ///
    /// On a miss the pair lookup runs under the retry policy; exhaustion
    /// propagates the last error with no stale or default price substituted.
    pub async fn fetch_prices(&self) -> Result<PricePoint> {
        if let Some(cached) = self.cache.read::<PricePoint>(PRICES_CACHE_KEY).await {
            debug!("Cache hit for fetch_prices");
            return Ok(cached);
        }
        debug!("Cache miss for fetch_prices");

        let pair = retry_with_backoff(&self.retry, "dexscreener pair lookup", || {
            self.price_source.fetch_pair()
        })
        .await?;

        let price_native = Decimal::from_str(&pair.price_native).map_err(|e| {
            WalletError::parse(format!("Bad priceNative '{}': {}", pair.price_native, e))
        })?;
        if price_native <= Decimal::ZERO {
            return Err(WalletError::parse(format!(
                "Non-positive priceNative '{}' for pair {}",
                pair.price_native, pair.pair_address
            )));
        }

        let prices = PricePoint {
            quote_symbol: pair.quote_token.symbol,
            base_symbol: pair.base_token.symbol,
            price_native,
            usd_per_unit: Decimal::ONE / price_native,
        };
        self.cache.write(PRICES_CACHE_KEY, &prices).await;
        Ok(prices)
    }

    /// Valuation for `address`, cached under `portfolio-<address>`.
    pub async fn fetch_portfolio_value(&self, address: &str) -> Result<Portfolio> {
        let cache_key = format!("{}{}", PORTFOLIO_KEY_PREFIX, address);
        if let Some(cached) = self.cache.read::<Portfolio>(&cache_key).await {
            debug!("Cache hit for fetch_portfolio_value: {}", address);
            return Ok(cached);
        }
        debug!("Cache miss for fetch_portfolio_value: {}", address);

        // Neither lookup depends on the other's result; run them concurrently.
        let (prices, balance) = tokio::try_join!(
            self.fetch_prices(),
            self.balance_source.get_balance(address)
        )?;

        let raw_balance = Decimal::from_str(&balance.total_balance).map_err(|e| {
            WalletError::parse(format!(
                "Bad totalBalance '{}': {}",
                balance.total_balance, e
            ))
        })?;
        let total_sui = raw_balance / Decimal::from(MIST_PER_SUI);
        let total_usd = total_sui * prices.usd_per_unit;

        let portfolio = Portfolio { total_sui, total_usd };
        self.cache.write(&cache_key, &portfolio).await;
        info!("Fetched portfolio for {}: ${:.2}", address, portfolio.total_usd);
        Ok(portfolio)
    }

    /// Human-readable report. The one boundary that absorbs failures into a
    /// static message instead of propagating them.
    pub async fn get_formatted_portfolio(&self, name: &str, address: &str) -> String {
        match self.fetch_portfolio_value(address).await {
            Ok(portfolio) => format_portfolio(name, address, &portfolio),
            Err(e) => {
                error!("Error generating portfolio report for {}: {}", address, e);
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}
