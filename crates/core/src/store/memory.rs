use std::collections::HashMap;

use crate::errors::CoreError;

use super::traits::UserStore;

/// In-memory user/holdings store, seeded from the JSON user database
/// (`{"user1": {"AAPL": 10.0, "MSFT": 2.0}}`).
///
/// Replaces a process-wide user dictionary: the owner constructs it,
/// passes it into the tracker, and takes it back on teardown to persist
/// whatever changed.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, HashMap<String, f64>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from the JSON user-database format.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let users = serde_json::from_str(json)?;
        Ok(Self { users })
    }

    /// Load a store from a JSON file on disk.
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the store back to its JSON file format.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.users)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize user store: {e}")))
    }

    /// Write the store to a JSON file on disk.
    pub fn save_to_file(&self, path: &str) -> Result<(), CoreError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Number of users in the store.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut HashMap<String, f64>, CoreError> {
        self.users
            .get_mut(username)
            .ok_or_else(|| CoreError::UserNotFound(username.to_string()))
    }
}

impl UserStore for MemoryUserStore {
    fn holdings_for(&self, username: &str) -> Result<HashMap<String, f64>, CoreError> {
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| CoreError::UserNotFound(username.to_string()))
    }

    fn has_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn add_user(&mut self, username: &str) {
        self.users.entry(username.to_string()).or_default();
    }

    fn add_holding(
        &mut self,
        username: &str,
        symbol: &str,
        quantity: f64,
    ) -> Result<(), CoreError> {
        validate_quantity(quantity)?;
        let holdings = self.user_mut(username)?;
        *holdings.entry(symbol.to_uppercase()).or_insert(0.0) += quantity;
        Ok(())
    }

    fn update_holding(
        &mut self,
        username: &str,
        symbol: &str,
        quantity: f64,
    ) -> Result<(), CoreError> {
        validate_quantity(quantity)?;
        let upper = symbol.to_uppercase();
        let holdings = self.user_mut(username)?;
        match holdings.get_mut(&upper) {
            Some(held) => {
                *held = quantity;
                Ok(())
            }
            None => Err(CoreError::HoldingNotFound {
                username: username.to_string(),
                symbol: upper,
            }),
        }
    }

    fn remove_holding(&mut self, username: &str, symbol: &str) -> Result<(), CoreError> {
        let upper = symbol.to_uppercase();
        let holdings = self.user_mut(username)?;
        holdings
            .remove(&upper)
            .map(|_| ())
            .ok_or(CoreError::HoldingNotFound {
                username: username.to_string(),
                symbol: upper,
            })
    }
}

fn validate_quantity(quantity: f64) -> Result<(), CoreError> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "Holding quantity must be positive and finite, got {quantity}"
        )));
    }
    Ok(())
}
