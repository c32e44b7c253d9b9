use wealth_core::PriceError;
use wealth_core::PriceSource;
use wealth_core::price::{PriceSourceConfig, PriceSourceFactory};

use crate::coingecko::{CoinGeckoSource, DEFAULT_ENDPOINT};

/// [`PriceSourceFactory`] for CoinGecko.
///
/// Register this with a [`wealth_core::price::PriceSourceRegistry`] to make
/// the `"coingecko"` backend available:
///
/// ```rust,no_run
/// use wealth_core::price::PriceSourceRegistry;
/// use wealth_price::CoinGeckoSourceFactory;
///
/// let mut registry = PriceSourceRegistry::new();
/// registry.register(Box::new(CoinGeckoSourceFactory));
/// ```
pub struct CoinGeckoSourceFactory;

impl PriceSourceFactory for CoinGeckoSourceFactory {
    fn backend_name(&self) -> &'static str {
        "coingecko"
    }

    /// Uses `config.endpoint` when set, otherwise [`DEFAULT_ENDPOINT`].
    fn create(
        &self,
        config: &PriceSourceConfig,
    ) -> Result<Box<dyn PriceSource>, PriceError> {
        let endpoint = config.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let source = CoinGeckoSource::new(endpoint, config.timeout)?;
        Ok(Box::new(source))
    }
}
