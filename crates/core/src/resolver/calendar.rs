use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};

/// Weekday arithmetic for snapping arbitrary calendar dates onto trading
/// reference days.
///
/// Only weekends are modeled. A market holiday still resolves to a
/// closed-market date and the series lookup for it simply misses; the
/// extraction layer treats that as a gap, not an error.

pub(crate) fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// The most recent trading reference day strictly before `date`
/// (defaulting to today).
///
/// Monday and the whole weekend resolve to the previous Friday; any
/// other weekday steps back one calendar day. The step is never zero:
/// the provider has no same-day close yet, so even a mid-week date
/// resolves to the day before it.
pub fn latest_trading_day_on_or_before(date: Option<NaiveDate>) -> NaiveDate {
    let date = date.unwrap_or_else(today_utc);
    let delta = match date.weekday() {
        Weekday::Mon => 3,
        Weekday::Sun => 2,
        _ => 1,
    };
    date - Duration::days(delta)
}

/// The first trading reference day at or after `date`.
///
/// Saturday and Sunday advance to the following Monday; weekdays are
/// returned unchanged. A defaulted `date` (today) is returned verbatim
/// with no weekend adjustment at all: this direction only marks where
/// to start querying forward from, it does not guarantee an open market.
pub fn earliest_trading_day_on_or_after(date: Option<NaiveDate>) -> NaiveDate {
    let date = match date {
        Some(d) => d,
        None => return today_utc(),
    };
    let delta = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + Duration::days(delta)
}
