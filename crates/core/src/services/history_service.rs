use chrono::NaiveDate;
use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::quote::{ClosingSeries, PriceHistory};
use crate::providers::traits::QuoteProvider;
use crate::resolver::extract;
use crate::resolver::window::DateWindow;

/// Resolves user-requested date ranges against the provider's discrete
/// trading-day series.
///
/// No caching, no batching: every call fetches fresh from the provider
/// and re-resolves. Each resolution is a pure function over that call's
/// inputs — there is no shared mutable state between requests.
pub struct HistoryService {
    provider: Box<dyn QuoteProvider>,
}

impl HistoryService {
    pub fn new(provider: Box<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Windowed closing-price history for a ticker.
    ///
    /// Resolves the window (defaulting to the last 30 calendar days up
    /// to the most recent trading day), picks daily/weekly/monthly from
    /// the span, fetches that series, and extracts the snapped
    /// sub-range. An empty or inverted window is `InvalidRange` and no
    /// fetch happens.
    pub async fn price_history(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<PriceHistory, CoreError> {
        let (window, granularity) = DateWindow::resolve(start, end)?;
        debug!("resolved {window} -> {granularity} series for {symbol}");

        let series = self.provider.fetch_series(symbol, granularity).await?;
        let closes = extract::extract_range(&series, &window);

        Ok(PriceHistory {
            symbol: symbol.to_uppercase(),
            granularity,
            closes,
        })
    }

    /// The last `n` daily observations for a ticker, ascending.
    /// Fewer than `n` available means everything available.
    pub async fn last_n(&self, symbol: &str, n: usize) -> Result<ClosingSeries, CoreError> {
        let series = self.provider.fetch_daily(symbol).await?;
        Ok(extract::last_n(&series, n))
    }

    /// The most recent available daily close, or NaN when the provider
    /// has nothing usable for this ticker.
    ///
    /// Fetch failures degrade to NaN as well — "unavailable" is a value
    /// here, not an error, so one dead ticker never sinks an aggregate.
    pub async fn latest_close(&self, symbol: &str) -> f64 {
        match self.provider.fetch_daily(symbol).await {
            Ok(series) => extract::latest_close(&series),
            Err(e) => {
                warn!("Could not fetch daily series for {symbol}: {e}");
                f64::NAN
            }
        }
    }

    /// The daily close on a specific date, if the market traded that day.
    pub async fn close_on(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<f64>, CoreError> {
        let series = self.provider.fetch_daily(symbol).await?;
        Ok(extract::close_on(&series, date))
    }
}
