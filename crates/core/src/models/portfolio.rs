use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One position inside a portfolio summary.
///
/// `latest_close` is NaN when the provider had no usable data for the
/// ticker — the position is still listed, just unpriced. serde_json
/// renders the NaN as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPosition {
    /// Number of shares held
    pub quantity: f64,

    /// Most recent available close, or NaN when unavailable
    pub latest_close: f64,
}

/// The complete portfolio payload for one user.
///
/// The core computes all the numbers — the route layer only serializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub username: String,

    /// Ticker → position, in symbol order
    pub positions: BTreeMap<String, StockPosition>,

    /// Σ quantity × reference-day close, rounded to two decimals.
    /// Tickers without a reference-day close contribute nothing.
    pub total_value: f64,
}
