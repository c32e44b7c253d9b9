//! Best-effort market price lookup.
//!
//! A [`PriceSource`] returns a [`PriceQuote`] or a [`PriceError`].
//! [`fetch_or_fallback`] wraps a source with a timeout and turns every
//! failure into [`PriceOutcome::Fallback`], so callers always get a price
//! and decide for themselves how to surface the warning.

pub mod factory;
mod fixed;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

pub use crate::models::reference_data::FALLBACK_PRICE_USD;
pub use factory::{PriceSourceConfig, PriceSourceFactory, PriceSourceRegistry};
pub use fixed::{FixedPriceSource, FixedPriceSourceFactory};

/// Default time allowed for a live lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price request timed out after {0:?}")]
    Timeout(Duration),

    #[error("price source returned HTTP {status}")]
    Status { status: u16 },

    #[error("price request failed: {0}")]
    Transport(String),

    #[error("malformed price response: {0}")]
    Malformed(String),

    #[error("price source configuration error: {0}")]
    Configuration(String),
}

/// A price observed at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// Fiat price of one unit.
    pub price: Decimal,
    /// ISO currency code, e.g. `"usd"`.
    pub currency: String,
    /// Name of the backend that produced the quote.
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Stamps a quote with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Malformed`] unless `price` is positive.
    pub fn new(
        price: Decimal,
        currency: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, PriceError> {
        if price <= Decimal::ZERO {
            return Err(PriceError::Malformed(format!(
                "price must be positive, got {price}"
            )));
        }
        Ok(Self {
            price,
            currency: currency.into(),
            source: source.into(),
            fetched_at: Utc::now(),
        })
    }
}

/// Anything that can report the asset's current market price.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Short identifier used in logs and warnings.
    fn name(&self) -> &str;

    async fn current_price(&self) -> Result<PriceQuote, PriceError>;
}

/// Result of a best-effort lookup: always carries a usable price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceOutcome {
    Live(PriceQuote),
    Fallback { price: Decimal, error: PriceError },
}

impl PriceOutcome {
    pub fn price(&self) -> Decimal {
        match self {
            Self::Live(quote) => quote.price,
            Self::Fallback { price, .. } => *price,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// The failure that forced the fallback, if any.
    pub fn error(&self) -> Option<&PriceError> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { error, .. } => Some(error),
        }
    }
}

/// Asks `source` for a price, giving up after `timeout`.
///
/// Never fails: any error or timeout yields [`PriceOutcome::Fallback`]
/// carrying `fallback` and the reason. No retries are attempted.
pub async fn fetch_or_fallback(
    source: &dyn PriceSource,
    timeout: Duration,
    fallback: Decimal,
) -> PriceOutcome {
    let result = match tokio::time::timeout(timeout, source.current_price()).await {
        Ok(result) => result,
        Err(_) => Err(PriceError::Timeout(timeout)),
    };

    match result {
        Ok(quote) => {
            info!(source = source.name(), price = %quote.price, "fetched live price");
            PriceOutcome::Live(quote)
        }
        Err(error) => {
            warn!(source = source.name(), %error, %fallback, "using fallback price");
            PriceOutcome::Fallback {
                price: fallback,
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    struct FailingSource(PriceError);

    #[async_trait]
    impl PriceSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }
        async fn current_price(&self) -> Result<PriceQuote, PriceError> {
            Err(self.0.clone())
        }
    }

    /// Never answers; only the timeout ends the lookup.
    struct StalledSource;

    #[async_trait]
    impl PriceSource for StalledSource {
        fn name(&self) -> &str {
            "stalled"
        }
        async fn current_price(&self) -> Result<PriceQuote, PriceError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn live_quote_is_passed_through() {
        let source = FixedPriceSource::new(dec!(65000));

        let outcome = fetch_or_fallback(&source, DEFAULT_TIMEOUT, FALLBACK_PRICE_USD).await;

        assert!(outcome.is_live());
        assert_eq!(outcome.price(), dec!(65000));
        assert_eq!(outcome.error(), None);
    }

    #[tokio::test]
    async fn source_error_yields_fallback_constant() {
        let source = FailingSource(PriceError::Status { status: 503 });

        let outcome = fetch_or_fallback(&source, DEFAULT_TIMEOUT, FALLBACK_PRICE_USD).await;

        assert_eq!(
            outcome,
            PriceOutcome::Fallback {
                price: FALLBACK_PRICE_USD,
                error: PriceError::Status { status: 503 },
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_source_times_out_to_fallback() {
        let timeout = Duration::from_millis(250);

        let outcome = fetch_or_fallback(&StalledSource, timeout, dec!(42)).await;

        assert_eq!(outcome.price(), dec!(42));
        assert_eq!(outcome.error(), Some(&PriceError::Timeout(timeout)));
    }

    #[test]
    fn quote_rejects_non_positive_price() {
        assert!(matches!(
            PriceQuote::new(Decimal::ZERO, "usd", "test"),
            Err(PriceError::Malformed(_))
        ));
        assert!(PriceQuote::new(dec!(-1), "usd", "test").is_err());
    }

    #[test]
    fn fallback_constant_is_one_hundred_thousand() {
        assert_eq!(FALLBACK_PRICE_USD, dec!(100000));
    }
}
