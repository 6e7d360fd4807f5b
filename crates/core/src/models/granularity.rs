use serde::{Deserialize, Serialize};

/// The sampling interval of a closing-price series.
/// Chosen per request from the resolved window's span; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// One close per trading day (spans up to 30 days)
    Daily,
    /// One close per trading week (spans of 31 to 180 days)
    Weekly,
    /// One close per month (spans over 180 days)
    Monthly,
}

impl Granularity {
    /// Pick the series granularity for a window spanning `days` calendar days.
    ///
    /// Returns `None` for a zero-length (or inverted) window. The caller
    /// must treat that as an invalid range and skip the provider fetch.
    pub fn for_span_days(days: i64) -> Option<Self> {
        if days > 180 {
            Some(Granularity::Monthly)
        } else if days > 30 {
            Some(Granularity::Weekly)
        } else if days > 0 {
            Some(Granularity::Daily)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Daily => write!(f, "Daily"),
            Granularity::Weekly => write!(f, "Weekly"),
            Granularity::Monthly => write!(f, "Monthly"),
        }
    }
}
