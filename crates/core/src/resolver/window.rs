use chrono::{Duration, NaiveDate};

use crate::errors::CoreError;
use crate::models::granularity::Granularity;

use super::calendar;

/// Calendar days the default lookback window covers.
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// A resolved request window: both endpoints snapped onto trading
/// reference days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// A window with endpoints taken as-is (no snapping).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Resolve caller-supplied (possibly absent) endpoints into a
    /// trading window and pick the series granularity for its span.
    ///
    /// With both endpoints absent, the window is the last 30 calendar
    /// days up to the most recent trading day. Supplied endpoints are
    /// snapped — start forward past a weekend, end backward onto the
    /// previous trading reference day. Granularity is selected here,
    /// before any provider fetch; an empty or inverted window is
    /// `InvalidRange` and nothing is fetched.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(Self, Granularity), CoreError> {
        let end = calendar::latest_trading_day_on_or_before(end);

        let start_seed =
            start.unwrap_or_else(|| calendar::today_utc() - Duration::days(DEFAULT_WINDOW_DAYS));
        let start = calendar::earliest_trading_day_on_or_after(Some(start_seed));

        if end < start {
            return Err(CoreError::InvalidRange(format!(
                "start {start} falls after end {end} once snapped to trading days"
            )));
        }

        let span = (end - start).num_days();
        let granularity = Granularity::for_span_days(span).ok_or_else(|| {
            CoreError::InvalidRange(format!("window {start}..{end} has zero span"))
        })?;

        Ok((Self { start, end }, granularity))
    }

    /// Calendar days between the endpoints.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
