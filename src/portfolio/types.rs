use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// SUI price derived from one DEX pair lookup. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub quote_symbol: String,
    pub base_symbol: String,
    /// Quoted price of one base token in quote tokens.
    pub price_native: Decimal,
    /// Reciprocal of `price_native`; USD per SUI while the pair's base is a
    /// USD-pegged asset.
    pub usd_per_unit: Decimal,
}

/// Valuation of a wallet's SUI balance. Recomputed on every cache miss;
/// only its serialized form is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub total_sui: Decimal,
    pub total_usd: Decimal,
}
