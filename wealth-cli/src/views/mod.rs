//! Text rendering for everything the session prints.
//!
//! Each function returns a `String`; the session decides where it goes.

pub mod chart;
pub mod header;
pub mod price;
pub mod result;
pub mod scenario;
pub mod table;

/// Ticker shown next to asset quantities.
pub const ASSET_TICKER: &str = "BTC";
