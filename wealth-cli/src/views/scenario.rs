use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wealth_core::calculations::common::{fixed, format_millions};
use wealth_core::{ScenarioKind, ScenarioSet};

const TRILLION: Decimal = dec!(1000000000000);

/// Message printed after a scenario switch.
pub fn render_switch(
    kind: ScenarioKind,
    scenarios: &ScenarioSet,
) -> String {
    let figures = &scenarios.figures;
    match kind {
        ScenarioKind::Global => format!(
            "\n✓ Switched to GLOBAL wealth distribution (UBS 2024)\n\
             Data: UBS Global Wealth Report 2024\n\
             Sample: {} billion adults, ${} trillion\n\
             Bitcoin allocation: Compete for full {} BTC supply\n\
             Key thresholds: Top 1.5%: $1M+ | Top 17.8%: $100K+ | Median: ~$25K\n\n",
            fixed(figures.global_adults / dec!(1000000000), 3),
            fixed(figures.global_wealth / TRILLION, 1),
            format_millions(figures.asset_supply),
        ),
        ScenarioKind::National => {
            let share = fixed(figures.national_wealth_share * Decimal::ONE_HUNDRED, 0);
            format!(
                "\n✓ Switched to US wealth distribution (Federal Reserve)\n\
                 Data: Survey of Consumer Finances\n\
                 US wealth: ${}T ({share}% of global)\n\
                 Bitcoin allocation: Compete for {} BTC ({share}% of supply)\n\
                 Key thresholds: Top 1%: $11.1M+ | Top 10%: $1.2M+ | Median: $121K\n\n",
                fixed(figures.national_wealth() / TRILLION, 1),
                format_millions(figures.national_supply()),
            )
        }
    }
}
