use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::quote::{PriceRecord, PriceSeries};

use super::traits::QuoteProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage quote provider.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: API key (settings key "alphavantage").
/// - **Series**: TIME_SERIES_DAILY / _WEEKLY / _MONTHLY; prices in the
///   stock's native currency (typically USD).
///
/// Weekends and market holidays are simply absent from the returned
/// mapping — the resolver layer deals with the gaps. An invalid ticker
/// or an exhausted rate limit yields an empty series, never an error.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct SeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    daily: Option<HashMap<String, SeriesEntry>>,
    #[serde(rename = "Weekly Time Series")]
    weekly: Option<HashMap<String, SeriesEntry>>,
    #[serde(rename = "Monthly Time Series")]
    monthly: Option<HashMap<String, SeriesEntry>>,
    // The API reports problems in-band: "Error Message" for bad symbols,
    // "Note"/"Information" for rate limits and maintenance.
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

impl SeriesResponse {
    fn diagnostic(&self) -> Option<String> {
        self.error_message
            .clone()
            .or_else(|| self.note.clone())
            .or_else(|| self.information.clone())
    }
}

#[derive(Deserialize)]
struct SeriesEntry {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume", default)]
    volume: String,
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    async fn fetch_daily(&self, symbol: &str) -> Result<PriceSeries, CoreError> {
        let resp = self
            .request(symbol, &[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", &symbol.to_uppercase()),
                ("outputsize", "compact"),
                ("apikey", &self.api_key),
            ])
            .await?;
        let diagnostic = resp.diagnostic();
        Ok(collect_series(symbol, resp.daily, diagnostic))
    }

    async fn fetch_weekly(&self, symbol: &str) -> Result<PriceSeries, CoreError> {
        let resp = self
            .request(symbol, &[
                ("function", "TIME_SERIES_WEEKLY"),
                ("symbol", &symbol.to_uppercase()),
                ("apikey", &self.api_key),
            ])
            .await?;
        let diagnostic = resp.diagnostic();
        Ok(collect_series(symbol, resp.weekly, diagnostic))
    }

    async fn fetch_monthly(&self, symbol: &str) -> Result<PriceSeries, CoreError> {
        let resp = self
            .request(symbol, &[
                ("function", "TIME_SERIES_MONTHLY"),
                ("symbol", &symbol.to_uppercase()),
                ("apikey", &self.api_key),
            ])
            .await?;
        let diagnostic = resp.diagnostic();
        Ok(collect_series(symbol, resp.monthly, diagnostic))
    }
}

impl AlphaVantageProvider {
    async fn request(
        &self,
        symbol: &str,
        query: &[(&str, &str)],
    ) -> Result<SeriesResponse, CoreError> {
        debug!("Alpha Vantage request for {symbol}");
        self.client
            .get(BASE_URL)
            .query(query)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse response for {symbol}: {e}"),
            })
    }
}

/// Turn the raw date-keyed mapping into a `PriceSeries`.
///
/// A missing mapping becomes an empty series, warn-logged with whatever
/// the API said about it. Date keys that don't parse as YYYY-MM-DD are
/// skipped.
fn collect_series(
    symbol: &str,
    raw: Option<HashMap<String, SeriesEntry>>,
    diagnostic: Option<String>,
) -> PriceSeries {
    let Some(raw) = raw else {
        warn!(
            "No series data for {symbol}: {}",
            diagnostic.as_deref().unwrap_or("no diagnostic from API")
        );
        return PriceSeries::new();
    };

    raw.into_iter()
        .filter_map(|(date_str, entry)| {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").ok()?;
            Some((
                date,
                PriceRecord {
                    open: entry.open,
                    high: entry.high,
                    low: entry.low,
                    close: entry.close,
                    volume: entry.volume,
                },
            ))
        })
        .collect()
}
