use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use wealth_core::{PriceError, PriceQuote, PriceSource};

/// CoinGecko's simple-price endpoint for bitcoin in US dollars.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

const USER_AGENT: &str = concat!("btc-wealth/", env!("CARGO_PKG_VERSION"));

/// Body shape: `{"bitcoin":{"usd":64321.5}}`.
#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: Option<CoinPrices>,
}

#[derive(Debug, Deserialize)]
struct CoinPrices {
    usd: Option<f64>,
}

/// Extracts the USD price from a simple-price response body.
///
/// # Errors
///
/// Returns [`PriceError::Malformed`] when the body is not JSON, lacks the
/// `bitcoin.usd` field, or holds a value that is not a positive finite
/// number.
pub fn parse_simple_price(body: &str) -> Result<Decimal, PriceError> {
    let response: SimplePriceResponse =
        serde_json::from_str(body).map_err(|e| PriceError::Malformed(e.to_string()))?;

    let usd = response
        .bitcoin
        .and_then(|prices| prices.usd)
        .ok_or_else(|| PriceError::Malformed("missing bitcoin.usd field".to_string()))?;

    Decimal::try_from(usd)
        .map_err(|e| PriceError::Malformed(format!("unusable price {usd}: {e}")))
}

/// Live price from the CoinGecko public API.
pub struct CoinGeckoSource {
    client: reqwest::Client,
    endpoint: String,
}

impl CoinGeckoSource {
    /// Builds a client that gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Configuration`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PriceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PriceError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    fn name(&self) -> &str {
        "coingecko"
    }

    async fn current_price(&self) -> Result<PriceQuote, PriceError> {
        debug!(endpoint = %self.endpoint, "requesting live price");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        let price = parse_simple_price(&body)?;

        PriceQuote::new(price, "usd", self.name())
    }
}

fn transport_error(error: reqwest::Error) -> PriceError {
    if error.is_timeout() {
        PriceError::Transport(format!("timed out: {error}"))
    } else {
        PriceError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_usd_price() {
        let price = parse_simple_price(r#"{"bitcoin":{"usd":64321.5}}"#).unwrap();

        assert_eq!(price, dec!(64321.5));
    }

    #[test]
    fn parses_integer_price() {
        assert_eq!(parse_simple_price(r#"{"bitcoin":{"usd":97000}}"#).unwrap(), dec!(97000));
    }

    #[test]
    fn missing_coin_is_malformed() {
        let result = parse_simple_price(r#"{"ethereum":{"usd":3000}}"#);

        assert_eq!(
            result,
            Err(PriceError::Malformed("missing bitcoin.usd field".to_string()))
        );
    }

    #[test]
    fn missing_currency_is_malformed() {
        assert!(matches!(
            parse_simple_price(r#"{"bitcoin":{"eur":60000}}"#),
            Err(PriceError::Malformed(_))
        ));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            parse_simple_price("<html>rate limited</html>"),
            Err(PriceError::Malformed(_))
        ));
    }

    #[test]
    fn string_price_is_malformed() {
        assert!(matches!(
            parse_simple_price(r#"{"bitcoin":{"usd":"lots"}}"#),
            Err(PriceError::Malformed(_))
        ));
    }

    #[test]
    fn new_keeps_endpoint() {
        let source = CoinGeckoSource::new("http://localhost:9/price", Duration::from_secs(1)).unwrap();

        assert_eq!(source.endpoint(), "http://localhost:9/price");
        assert_eq!(source.name(), "coingecko");
    }
}
