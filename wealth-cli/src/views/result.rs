use wealth_core::calculations::common::{
    fixed, format_millions, format_percentage, format_units, format_usd,
};
use wealth_core::{AssetShare, MacroFigures, PriceOutcome, ScenarioKind};

use super::ASSET_TICKER;
use super::price::price_label;

/// Block printed for a net-worth lookup.
pub fn render_result(
    share: &AssetShare,
    figures: &MacroFigures,
    price: Option<&PriceOutcome>,
) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "=== Results for {} ({}) ===",
            format_usd(share.net_worth, 0),
            share.scenario_label
        ),
        format!("{} percentile: {}%", share.scenario.label(), fixed(share.percentile, 2)),
        format!("Bitcoin needed: {} {ASSET_TICKER}", format_units(share.asset_needed)),
    ];

    let total_supply = format!(
        "% of total Bitcoin supply ({}): {}",
        format_millions(figures.asset_supply),
        format_percentage(share.fraction_of_total_supply(figures))
    );
    let global_wealth = fixed(share.fraction_of_global_wealth(figures), 8);
    match share.scenario {
        ScenarioKind::Global => {
            lines.push(total_supply);
            lines.push(format!("% of global wealth: {global_wealth}%"));
        }
        ScenarioKind::National => {
            lines.push(format!(
                "% of US Bitcoin allocation ({}): {}",
                format_millions(share.scenario_supply),
                format_percentage(share.supply_fraction)
            ));
            lines.push(total_supply);
            lines.push(format!("% of US wealth: {}%", fixed(share.wealth_fraction, 8)));
            lines.push(format!("% of global wealth: {global_wealth}%"));
        }
    }

    if let Some(outcome) = price {
        lines.push(format!(
            "At current price ({}): {}",
            price_label(outcome),
            share.cost_at(outcome.price()).map_or_else(
                || "unavailable (amount too large)".to_string(),
                |cost| format_usd(cost, 2),
            )
        ));
    }

    lines.push(String::new());
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use wealth_core::{PriceError, PriceQuote, ScenarioSet, needed_asset_share};

    use super::*;

    fn fallback() -> PriceOutcome {
        PriceOutcome::Fallback {
            price: dec!(100000),
            error: PriceError::Transport("offline".to_string()),
        }
    }

    #[test]
    fn global_result_lists_supply_and_wealth_shares() {
        let set = ScenarioSet::reference().unwrap();
        let share = needed_asset_share(dec!(1000000), &set.global);

        let text = render_result(&share, &set.figures, None);

        assert!(text.contains("=== Results for $1,000,000 (Global (UBS 2024)) ==="), "{text}");
        assert!(text.contains("Global percentile: 98.50%"), "{text}");
        assert!(text.contains("Bitcoin needed: 0.04667704 BTC"), "{text}");
        assert!(text.contains("% of total Bitcoin supply (21M): 0.00000022%"), "{text}");
        assert!(!text.contains("US wealth"));
        assert!(!text.contains("At current price"));
    }

    #[test]
    fn national_result_adds_allocation_lines() {
        let set = ScenarioSet::reference().unwrap();
        let share = needed_asset_share(dec!(121000), &set.national);

        let text = render_result(&share, &set.figures, None);

        assert!(text.contains("US percentile: 50.00%"), "{text}");
        assert!(text.contains("% of US Bitcoin allocation (6.3M):"), "{text}");
        assert!(text.contains("% of US wealth:"), "{text}");
        assert!(text.contains("% of global wealth:"), "{text}");
    }

    #[test]
    fn known_price_adds_cost_line() {
        let set = ScenarioSet::reference().unwrap();
        let share = needed_asset_share(dec!(1000000), &set.global);

        let text = render_result(&share, &set.figures, Some(&fallback()));

        assert!(text.contains("At current price ($100,000 fallback): $4,667.70"), "{text}");
    }

    #[test]
    fn overflowing_cost_reads_unavailable() {
        let set = ScenarioSet::reference().unwrap();
        let share = needed_asset_share(Decimal::MAX, &set.global);
        let price = PriceOutcome::Live(PriceQuote::new(dec!(100000000), "usd", "fixed").unwrap());

        let text = render_result(&share, &set.figures, Some(&price));

        assert!(
            text.contains("At current price ($100,000,000 live): unavailable (amount too large)"),
            "{text}"
        );
    }

    #[test]
    fn debt_renders_with_sign() {
        let set = ScenarioSet::reference().unwrap();
        let share = needed_asset_share(dec!(-20000), &set.global);

        let text = render_result(&share, &set.figures, None);

        assert!(text.contains("Results for -$20,000"), "{text}");
        assert!(text.contains("Global percentile: 0.00%"), "{text}");
        assert!(text.contains("Bitcoin needed: -0.00093354 BTC"), "{text}");
    }
}
