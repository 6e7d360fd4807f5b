use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::granularity::Granularity;

/// One trading day's record as the quote provider reports it.
///
/// Values arrive as decimal strings on the wire; only `close` is
/// consumed downstream, the rest is carried for completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl PriceRecord {
    /// Parse the closing price. `None` when the provider sent a
    /// non-numeric value.
    pub fn close_price(&self) -> Option<f64> {
        self.close.trim().parse().ok()
    }

    /// A record where open/high/low all equal the close and volume is
    /// zero. Convenient for seeding series in tests and mocks.
    pub fn from_close(close: impl Into<String>) -> Self {
        let close = close.into();
        Self {
            open: close.clone(),
            high: close.clone(),
            low: close.clone(),
            close,
            volume: "0".to_string(),
        }
    }
}

/// A provider's trading-day series: calendar date → price record.
///
/// Keys are NOT contiguous — weekends and market holidays are absent,
/// and provider outages can leave further gaps.
pub type PriceSeries = BTreeMap<NaiveDate, PriceRecord>;

/// A resolved closing-price series: date → close rendered with exactly
/// two decimal places, in ascending calendar order.
pub type ClosingSeries = BTreeMap<NaiveDate, String>;

/// The windowed price history handed to the route layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// The sampling interval selected for the request's window span
    pub granularity: Granularity,

    /// Closing prices inside the resolved window
    pub closes: ClosingSeries,
}
