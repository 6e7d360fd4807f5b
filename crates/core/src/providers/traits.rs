use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::granularity::Granularity;
use crate::models::quote::PriceSeries;

/// Trait abstraction for the external quote provider.
///
/// The production implementation speaks Alpha Vantage; tests substitute
/// canned series. If the API stops working or changes, only that one
/// implementation is replaced — the resolver and services are untouched.
///
/// A provider that cannot find the requested series (invalid ticker,
/// rate limit, outage) returns an EMPTY mapping, not an error. Only
/// transport-level failures surface as `Err`.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Daily closing series for a ticker.
    async fn fetch_daily(&self, symbol: &str) -> Result<PriceSeries, CoreError>;

    /// Weekly closing series for a ticker.
    async fn fetch_weekly(&self, symbol: &str) -> Result<PriceSeries, CoreError>;

    /// Monthly closing series for a ticker.
    async fn fetch_monthly(&self, symbol: &str) -> Result<PriceSeries, CoreError>;

    /// Fetch the series matching an already-selected granularity.
    async fn fetch_series(
        &self,
        symbol: &str,
        granularity: Granularity,
    ) -> Result<PriceSeries, CoreError> {
        match granularity {
            Granularity::Daily => self.fetch_daily(symbol).await,
            Granularity::Weekly => self.fetch_weekly(symbol).await,
            Granularity::Monthly => self.fetch_monthly(symbol).await,
        }
    }
}
