use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime configuration handed in by the application shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// API keys for providers that require them.
    /// Keys: provider name (e.g., "alphavantage").
    /// Values: the API key string.
    pub api_keys: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read provider keys from the environment — `ALPHA_VANTAGE_KEY`,
    /// the variable the deployment's .env file exports.
    pub fn from_env() -> Self {
        let mut api_keys = HashMap::new();
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_KEY") {
            if !key.is_empty() {
                api_keys.insert("alphavantage".to_string(), key);
            }
        }
        Self { api_keys }
    }

    /// Builder-style: add or replace one provider key.
    #[must_use]
    pub fn with_api_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), key.into());
        self
    }

    /// Look up the key configured for a provider.
    pub fn api_key(&self, provider: &str) -> Option<&str> {
        self.api_keys.get(provider).map(String::as_str)
    }
}
