use log::warn;
use std::collections::{BTreeMap, HashMap};

use crate::errors::CoreError;
use crate::models::portfolio::{PortfolioSummary, StockPosition};
use crate::resolver::calendar;
use crate::services::history_service::HistoryService;
use crate::store::traits::UserStore;

/// Builds per-user portfolio views by joining the holdings store with
/// the quote provider.
///
/// Tickers are valued one at a time; a ticker the provider cannot price
/// is skipped (total) or carried as NaN (summary) instead of failing
/// the whole portfolio.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Total portfolio value: Σ quantity × close on the most recent
    /// trading reference day, rounded to two decimals.
    ///
    /// Tickers without a close on that day (bad symbol, provider
    /// outage, market holiday) contribute nothing.
    pub async fn total_value(
        &self,
        history: &HistoryService,
        holdings: &HashMap<String, f64>,
    ) -> f64 {
        let reference_day = calendar::latest_trading_day_on_or_before(None);

        let mut total = 0.0;
        for (symbol, quantity) in holdings {
            match history.close_on(symbol, reference_day).await {
                Ok(Some(close)) => total += close * quantity,
                Ok(None) => warn!("Could not fetch data for {symbol} on {reference_day}."),
                Err(e) => warn!("Could not fetch data for {symbol}: {e}"),
            }
        }
        (total * 100.0).round() / 100.0
    }

    /// The full portfolio payload for one user: every position with its
    /// latest close (NaN when unavailable) plus the total value.
    pub async fn build_summary(
        &self,
        history: &HistoryService,
        store: &dyn UserStore,
        username: &str,
    ) -> Result<PortfolioSummary, CoreError> {
        let holdings = store.holdings_for(username)?;

        let mut positions = BTreeMap::new();
        for (symbol, quantity) in &holdings {
            let latest_close = history.latest_close(symbol).await;
            positions.insert(
                symbol.clone(),
                StockPosition {
                    quantity: *quantity,
                    latest_close,
                },
            );
        }

        let total_value = self.total_value(history, &holdings).await;

        Ok(PortfolioSummary {
            username: username.to_string(),
            positions,
            total_value,
        })
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
