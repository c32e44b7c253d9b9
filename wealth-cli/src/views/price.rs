use wealth_core::PriceOutcome;
use wealth_core::calculations::common::format_usd;

/// One-line summary of a price lookup. Fallbacks read as a warning.
pub fn render_price(outcome: &PriceOutcome) -> String {
    match outcome {
        PriceOutcome::Live(quote) => format!(
            "Current market price: {} (live from {})\n",
            format_usd(quote.price, 2),
            quote.source
        ),
        PriceOutcome::Fallback { price, error } => format!(
            "Warning: could not fetch a live price ({error}); using fallback {}\n",
            format_usd(*price, 2)
        ),
    }
}

/// Short label for table headers and cost lines.
pub fn price_label(outcome: &PriceOutcome) -> String {
    let kind = if outcome.is_live() { "live" } else { "fallback" };
    format!("{} {kind}", format_usd(outcome.price(), 0))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use wealth_core::{PriceError, PriceQuote};

    use super::*;

    #[test]
    fn live_price_names_source() {
        let outcome = PriceOutcome::Live(PriceQuote::new(dec!(64321.5), "usd", "coingecko").unwrap());

        assert_eq!(
            render_price(&outcome),
            "Current market price: $64,321.50 (live from coingecko)\n"
        );
        assert_eq!(price_label(&outcome), "$64,322 live");
    }

    #[test]
    fn fallback_reads_as_warning() {
        let outcome = PriceOutcome::Fallback {
            price: dec!(100000),
            error: PriceError::Status { status: 503 },
        };

        assert_eq!(
            render_price(&outcome),
            "Warning: could not fetch a live price (price source returned HTTP 503); using fallback $100,000.00\n"
        );
        assert_eq!(price_label(&outcome), "$100,000 fallback");
    }
}
