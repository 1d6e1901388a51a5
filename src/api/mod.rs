pub mod dexscreener;
pub mod sui_rpc;

pub use dexscreener::{DexScreenerClient, PairData, PairToken, PriceSource};
pub use sui_rpc::{BalanceSource, CoinBalance, SuiRpcClient};
