use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sui_wallet_tracker::api::{DexScreenerClient, SuiRpcClient};
use sui_wallet_tracker::cache::{RedisStore, TieredCache};
use sui_wallet_tracker::constants::{CACHE_NAMESPACE, CACHE_TTL_SECONDS};
use sui_wallet_tracker::portfolio::WalletProvider;
use sui_wallet_tracker::utils::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    info!("🔭 Tracking wallet {}", config.wallet_address);

    let store = RedisStore::connect(&config.redis_url).await?;
    let cache = Arc::new(TieredCache::new(
        Arc::new(store),
        CACHE_NAMESPACE,
        Duration::from_secs(CACHE_TTL_SECONDS),
    ));
    let price_source = Arc::new(DexScreenerClient::new(config.pair_address.clone())?);
    let balance_source = Arc::new(SuiRpcClient::new(config.sui_rpc_url.clone())?);
    let provider = WalletProvider::new(price_source, balance_source, cache);

    let report = provider
        .get_formatted_portfolio(&config.display_name, &config.wallet_address)
        .await;
    println!("{}", report);

    Ok(())
}
