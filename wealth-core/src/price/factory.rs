use std::collections::HashMap;
use std::time::Duration;

use rust_decimal::Decimal;

use super::{DEFAULT_TIMEOUT, FALLBACK_PRICE_USD, PriceError, PriceSource};

/// Backend-agnostic price source configuration.
///
/// `backend` must match the [`PriceSourceFactory::backend_name`] of a
/// registered factory. The remaining fields are read by whichever backends
/// need them.
///
/// | backend     | fields used                 |
/// |-------------|-----------------------------|
/// | `coingecko` | `endpoint`, `timeout`       |
/// | `fixed`     | `fixed_price`               |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSourceConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"coingecko"`).
    pub backend: String,
    /// Overrides the backend's default URL.
    pub endpoint: Option<String>,
    pub timeout: Duration,
    pub fixed_price: Decimal,
}

impl Default for PriceSourceConfig {
    fn default() -> Self {
        Self {
            backend: "coingecko".to_string(),
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            fixed_price: FALLBACK_PRICE_USD,
        }
    }
}

/// One implementation per price backend, registered with a
/// [`PriceSourceRegistry`] at startup.
pub trait PriceSourceFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use source. Must not perform network I/O.
    fn create(
        &self,
        config: &PriceSourceConfig,
    ) -> Result<Box<dyn PriceSource>, PriceError>;
}

/// Registry of [`PriceSourceFactory`] instances, keyed by backend name.
pub struct PriceSourceRegistry {
    factories: HashMap<&'static str, Box<dyn PriceSourceFactory>>,
}

impl PriceSourceRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn PriceSourceFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`PriceError::Configuration`]: no factory is registered for the
    ///   requested backend name.
    /// * Any error the chosen factory itself returns.
    pub fn create(
        &self,
        config: &PriceSourceConfig,
    ) -> Result<Box<dyn PriceSource>, PriceError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                PriceError::Configuration(format!(
                    "unknown price backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for PriceSourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
