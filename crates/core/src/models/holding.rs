use serde::{Deserialize, Serialize};

/// One row of a user's holdings: a ticker and how much of it is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "AAPL", "MSFT")
    pub symbol: String,

    /// Number of shares held
    pub quantity: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: f64) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            quantity,
        }
    }
}
