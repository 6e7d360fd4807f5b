//! Time-window resolution: maps arbitrary caller-requested date ranges
//! onto the discrete trading-day series the quote provider returns.

pub mod calendar;
pub mod extract;
pub mod window;
