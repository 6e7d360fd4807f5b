use thiserror::Error;

/// Unified error type for the entire portfolio-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Upstream data gaps (invalid ticker, missing series field, provider
/// outage) are NOT errors — they surface as empty series or NaN closes.
/// Only malformed input and transport/parse failures end up here.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Window / Input ──────────────────────────────────────────────
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No API key configured for provider: {0}")]
    MissingApiKey(String),

    // ── User / Holdings store ───────────────────────────────────────
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No holding of {symbol} for user {username}")]
    HoldingNotFound {
        username: String,
        symbol: String,
    },

    // ── Serialization / File ────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
