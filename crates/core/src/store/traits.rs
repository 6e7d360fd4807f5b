use std::collections::HashMap;

use crate::errors::CoreError;

/// The user/holdings store collaborator.
///
/// CRUD over `{ticker: quantity}` per user — nothing more. A production
/// deployment backs this with the relational store; `MemoryUserStore`
/// keeps it in-process for tests and single-node setups.
pub trait UserStore: Send + Sync {
    /// All holdings of a user as `{symbol: quantity}`.
    fn holdings_for(&self, username: &str) -> Result<HashMap<String, f64>, CoreError>;

    /// True when the user exists (possibly with no holdings yet).
    fn has_user(&self, username: &str) -> bool;

    /// Create a user with no holdings. Re-adding an existing user is a
    /// no-op and never touches their holdings.
    fn add_user(&mut self, username: &str);

    /// Add shares of `symbol` to a user's holdings, accumulating onto
    /// any existing position. Quantity must be positive.
    fn add_holding(&mut self, username: &str, symbol: &str, quantity: f64)
        -> Result<(), CoreError>;

    /// Replace the quantity of an existing holding. Quantity must be
    /// positive; use `remove_holding` to close a position.
    fn update_holding(
        &mut self,
        username: &str,
        symbol: &str,
        quantity: f64,
    ) -> Result<(), CoreError>;

    /// Remove a holding entirely.
    fn remove_holding(&mut self, username: &str, symbol: &str) -> Result<(), CoreError>;
}
