pub mod errors;
pub mod models;
pub mod providers;
pub mod resolver;
pub mod services;
pub mod store;

use chrono::NaiveDate;
use std::collections::HashMap;

use errors::CoreError;
use models::holding::Holding;
use models::portfolio::PortfolioSummary;
use models::quote::{ClosingSeries, PriceHistory};
use models::settings::Settings;
use providers::alphavantage::AlphaVantageProvider;
use providers::traits::QuoteProvider;
use services::history_service::HistoryService;
use services::portfolio_service::PortfolioService;
use store::memory::MemoryUserStore;
use store::traits::UserStore;

/// Main entry point for the portfolio tracker backend core.
///
/// Owns the user store and the services operating on it. All
/// collaborators are constructed and passed in explicitly — the route
/// layer builds one tracker at startup and tears it down with
/// [`PortfolioTracker::into_store`] when it wants the store back.
#[must_use]
pub struct PortfolioTracker {
    store: MemoryUserStore,
    history_service: HistoryService,
    portfolio_service: PortfolioService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("users", &self.store.user_count())
            .field("provider", &self.history_service.provider_name())
            .finish()
    }
}

impl PortfolioTracker {
    /// Build a tracker over an explicit store and quote provider.
    pub fn new(store: MemoryUserStore, provider: Box<dyn QuoteProvider>) -> Self {
        Self {
            store,
            history_service: HistoryService::new(provider),
            portfolio_service: PortfolioService::new(),
        }
    }

    /// Build a tracker wired to Alpha Vantage with the configured key.
    pub fn with_settings(
        store: MemoryUserStore,
        settings: &Settings,
    ) -> Result<Self, CoreError> {
        let key = settings
            .api_key("alphavantage")
            .ok_or_else(|| CoreError::MissingApiKey("alphavantage".into()))?;
        let provider = AlphaVantageProvider::new(key.to_string());
        Ok(Self::new(store, Box::new(provider)))
    }

    // ── Price History ───────────────────────────────────────────────

    /// Windowed closing-price history for a ticker. Absent endpoints
    /// default to the last 30 calendar days up to the most recent
    /// trading day; granularity follows the resolved span.
    pub async fn price_history(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<PriceHistory, CoreError> {
        self.history_service.price_history(symbol, start, end).await
    }

    /// The last `n` daily closes for a ticker, ascending.
    pub async fn last_n_closes(
        &self,
        symbol: &str,
        n: usize,
    ) -> Result<ClosingSeries, CoreError> {
        self.history_service.last_n(symbol, n).await
    }

    /// The most recent available daily close, or NaN when unavailable.
    pub async fn latest_close(&self, symbol: &str) -> f64 {
        self.history_service.latest_close(symbol).await
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Full portfolio payload for a user: positions with latest closes
    /// plus the total value.
    pub async fn portfolio_summary(
        &self,
        username: &str,
    ) -> Result<PortfolioSummary, CoreError> {
        self.portfolio_service
            .build_summary(&self.history_service, &self.store, username)
            .await
    }

    /// Total portfolio value for a user, rounded to two decimals.
    pub async fn total_value(&self, username: &str) -> Result<f64, CoreError> {
        let holdings = self.store.holdings_for(username)?;
        Ok(self
            .portfolio_service
            .total_value(&self.history_service, &holdings)
            .await)
    }

    // ── Holdings CRUD ───────────────────────────────────────────────

    /// A user's holdings as `{symbol: quantity}`.
    pub fn holdings(&self, username: &str) -> Result<HashMap<String, f64>, CoreError> {
        self.store.holdings_for(username)
    }

    /// A user's holdings as rows sorted by symbol (for list-style
    /// payloads).
    pub fn holdings_list(&self, username: &str) -> Result<Vec<Holding>, CoreError> {
        let mut rows: Vec<Holding> = self
            .store
            .holdings_for(username)?
            .into_iter()
            .map(|(symbol, quantity)| Holding { symbol, quantity })
            .collect();
        rows.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(rows)
    }

    #[must_use]
    pub fn has_user(&self, username: &str) -> bool {
        self.store.has_user(username)
    }

    /// Create a user with no holdings (no-op if they already exist).
    pub fn add_user(&mut self, username: &str) {
        self.store.add_user(username);
    }

    /// Add shares to a user's position (accumulating).
    pub fn add_holding(
        &mut self,
        username: &str,
        symbol: &str,
        quantity: f64,
    ) -> Result<(), CoreError> {
        self.store.add_holding(username, symbol, quantity)
    }

    /// Replace the quantity of an existing position.
    pub fn update_holding(
        &mut self,
        username: &str,
        symbol: &str,
        quantity: f64,
    ) -> Result<(), CoreError> {
        self.store.update_holding(username, symbol, quantity)
    }

    /// Close a position entirely.
    pub fn remove_holding(&mut self, username: &str, symbol: &str) -> Result<(), CoreError> {
        self.store.remove_holding(username, symbol)
    }

    // ── Teardown ────────────────────────────────────────────────────

    /// Consume the tracker and hand the store back so the owner can
    /// persist it.
    pub fn into_store(self) -> MemoryUserStore {
        self.store
    }
}
