use async_trait::async_trait;
use rust_decimal::Decimal;

use super::factory::{PriceSourceConfig, PriceSourceFactory};
use super::{PriceError, PriceQuote, PriceSource};

/// Serves the same price every time. Used offline and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPriceSource {
    price: Decimal,
}

impl FixedPriceSource {
    pub fn new(price: Decimal) -> Self {
        Self { price }
    }
}

#[async_trait]
impl PriceSource for FixedPriceSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn current_price(&self) -> Result<PriceQuote, PriceError> {
        PriceQuote::new(self.price, "usd", self.name())
    }
}

/// [`PriceSourceFactory`] for the `"fixed"` backend. Serves
/// [`PriceSourceConfig::fixed_price`].
pub struct FixedPriceSourceFactory;

impl PriceSourceFactory for FixedPriceSourceFactory {
    fn backend_name(&self) -> &'static str {
        "fixed"
    }

    fn create(
        &self,
        config: &PriceSourceConfig,
    ) -> Result<Box<dyn PriceSource>, PriceError> {
        Ok(Box::new(FixedPriceSource::new(config.fixed_price)))
    }
}
