use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be read as a net worth.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNetWorthError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid amount '{input}': {reason}")]
    Invalid { input: String, reason: String },

    /// A finite number too large (or too finely divided) to hold exactly.
    #[error("amount '{input}' is outside the supported range")]
    OutOfRange { input: String },
}

/// Normalizes currency input: trims whitespace and removes `$` and `,`.
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(['$', ','], "")
}

/// Parses a net worth such as `"$1,250,000"`, `"-5000"` or `"2.5e6"`.
///
/// Dollar signs and thousands separators are ignored. Scientific notation
/// is accepted. Negative amounts (net debt) are allowed.
pub fn parse_net_worth(s: &str) -> Result<Decimal, ParseNetWorthError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseNetWorthError::Empty);
    }

    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| {
            tracing::debug!(input = %s, "invalid amount: {}", e);
            if normalized.parse::<f64>().is_ok_and(f64::is_finite) {
                ParseNetWorthError::OutOfRange {
                    input: s.to_string(),
                }
            } else {
                ParseNetWorthError::Invalid {
                    input: s.to_string(),
                    reason: e.to_string(),
                }
            }
        })
}
