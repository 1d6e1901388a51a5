/// Smallest on-chain units per SUI.
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// TTL applied by both cache tiers.
pub const CACHE_TTL_SECONDS: u64 = 30;

/// Transient cache capacity.
pub const CACHE_MAX_ENTRIES: usize = 1024;

/// Namespace prefix for durable cache keys.
pub const CACHE_NAMESPACE: &str = "sui/wallet";

/// Cache key for the shared SUI price entry. All addresses read the same
/// price, so this key is not address-scoped.
pub const PRICES_CACHE_KEY: &str = "prices";

/// Cache key prefix for per-address portfolio entries.
pub const PORTFOLIO_KEY_PREFIX: &str = "portfolio-";

/// Attempt budget for the price fetch.
pub const MAX_RETRIES: u32 = 3;

/// Base backoff delay; attempt n waits `base * 2^n` (zero-indexed).
pub const RETRY_BASE_DELAY_MS: u64 = 2000;

/// Request-level timeout for upstream HTTP calls.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Default endpoints, overridable via environment.
pub const DEFAULT_SUI_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEXSCREENER_PAIRS_URL: &str = "https://api.dexscreener.com/latest/dex/pairs/sui";

/// Cetus SUI/USDC pool watched for the SUI price.
pub const DEFAULT_SUI_USDC_PAIR: &str =
    "0x51e883ba7c0b566a26cbc8a94cd33eb0abd418a77cc1e60ad22fd9b1f29cd2ab";
