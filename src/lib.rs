//! Sui wallet valuation core: a two-tier (memory + Redis) write-through
//! cache in front of a DexScreener price lookup with bounded-retry refill,
//! plus a Sui JSON-RPC balance fetch.

pub mod api;
pub mod cache;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;
