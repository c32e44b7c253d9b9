//! HTTP price backends for `wealth-core`'s [`PriceSource`] trait.
//!
//! [`PriceSource`]: wealth_core::PriceSource

mod coingecko;
mod factory;

pub use coingecko::{CoinGeckoSource, DEFAULT_ENDPOINT, parse_simple_price};
pub use factory::CoinGeckoSourceFactory;
