use chrono::{Duration, NaiveDate};

use crate::models::quote::{ClosingSeries, PriceSeries};

use super::window::DateWindow;

/// Render a close with exactly two decimal places.
fn format_close(value: f64) -> String {
    format!("{value:.2}")
}

/// The ordered sub-series of `series` inside `window`, with both bounds
/// first snapped onto dates actually present in the series.
///
/// `start` advances day-by-day until it is a series key or passes `end`
/// (empty result); `end` retreats likewise. The output is a contiguous
/// ascending slice of the series' own keys — no date is invented, no
/// date outside `[start, end]` appears. Pure and idempotent.
pub fn extract_range(series: &PriceSeries, window: &DateWindow) -> ClosingSeries {
    let mut start = window.start;
    let mut end = window.end;

    while start <= end && !series.contains_key(&start) {
        start += Duration::days(1);
    }
    while end >= start && !series.contains_key(&end) {
        end -= Duration::days(1);
    }
    if start > end {
        return ClosingSeries::new();
    }

    series
        .range(start..=end)
        .filter_map(|(date, record)| record.close_price().map(|c| (*date, format_close(c))))
        .collect()
}

/// The final `n` observations of `series`, in ascending order.
///
/// No date-bound narrowing: `n` beyond availability returns everything
/// available, and entries whose close does not parse are dropped.
pub fn last_n(series: &PriceSeries, n: usize) -> ClosingSeries {
    let skip = series.len().saturating_sub(n);
    series
        .iter()
        .skip(skip)
        .filter_map(|(date, record)| record.close_price().map(|c| (*date, format_close(c))))
        .collect()
}

/// The most recent available close, or NaN when the series is empty or
/// its latest close does not parse.
///
/// NaN means "unavailable" — callers skip the item in aggregation
/// instead of propagating a fatal error.
pub fn latest_close(series: &PriceSeries) -> f64 {
    series
        .last_key_value()
        .and_then(|(_, record)| record.close_price())
        .unwrap_or(f64::NAN)
}

/// The close on a specific date, if the market traded (and the provider
/// reported) that day.
pub fn close_on(series: &PriceSeries, date: NaiveDate) -> Option<f64> {
    series.get(&date).and_then(|record| record.close_price())
}
