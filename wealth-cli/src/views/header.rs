use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wealth_core::calculations::common::{fixed, format_millions, format_usd};
use wealth_core::{MacroFigures, ScenarioSet};

const TRILLION: Decimal = dec!(1000000000000);
const BILLION: Decimal = dec!(1000000000);
const MILLION: Decimal = dec!(1000000);

/// Banner printed once at startup.
pub fn render_header(scenarios: &ScenarioSet) -> String {
    let figures = &scenarios.figures;
    let share_pct = fixed(figures.national_wealth_share * Decimal::ONE_HUNDRED, 0);

    let mut out = String::from("=== Bitcoin World Wealth Percentile Calculator ===\n\n");
    out.push_str(&format!(
        "Global: {}B adults, ${}T wealth\n",
        fixed(figures.global_adults / BILLION, 1),
        fixed(figures.global_wealth / TRILLION, 1),
    ));
    out.push_str(&format!(
        "US: {}M adults ({}%), ${}T wealth ({share_pct}%)\n",
        fixed(figures.national_adults / MILLION, 0),
        fixed(figures.national_population_share() * Decimal::ONE_HUNDRED, 1),
        fixed(figures.national_wealth() / TRILLION, 1),
    ));
    out.push_str(&format!(
        "Total Bitcoin: {} BTC\n",
        format_millions(figures.asset_supply)
    ));
    out.push_str(&format!(
        "US Bitcoin allocation: {} BTC ({share_pct}%)\n",
        format_millions(figures.national_supply())
    ));
    out.push_str(&format!(
        "BTC Price (hyperbitcoinization): {}\n",
        format_usd(scenarios.global.constants.asset_price, 0)
    ));
    out.push('\n');
    out.push_str(&render_commands(figures));
    out
}

/// The command list, also shown by `help`.
pub fn render_commands(figures: &MacroFigures) -> String {
    let total = format_millions(figures.asset_supply);
    let national = format_millions(figures.national_supply());
    [
        "Commands:".to_string(),
        "  [number] - Calculate Bitcoin needed for net worth".to_string(),
        format!("  'global' - Switch to global data (compete for {total} BTC)"),
        format!("  'us'     - Switch to US data (compete for {national} BTC)"),
        "  'table'  - Show percentile table".to_string(),
        "  'plot'   - Show visualization".to_string(),
        "  'price'  - Refresh current market price".to_string(),
        "  'help'   - Show this list".to_string(),
        "  'quit'   - Exit".to_string(),
        String::new(),
    ]
    .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shows_derived_figures() {
        let header = render_header(&ScenarioSet::reference().unwrap());

        assert!(header.contains("Global: 3.8B adults, $449.9T wealth"), "{header}");
        assert!(header.contains("US: 260M adults (6.9%), $135.0T wealth (30%)"), "{header}");
        assert!(header.contains("Total Bitcoin: 21M BTC"), "{header}");
        assert!(header.contains("US Bitcoin allocation: 6.3M BTC (30%)"), "{header}");
        assert!(header.contains("BTC Price (hyperbitcoinization): $21,423,810"), "{header}");
    }

    #[test]
    fn commands_size_pools_from_figures() {
        let figures = MacroFigures {
            asset_supply: dec!(10000000),
            ..MacroFigures::reference()
        };

        let commands = render_commands(&figures);

        assert!(commands.contains("compete for 10M BTC"), "{commands}");
        assert!(commands.contains("compete for 3M BTC"), "{commands}");
    }

    #[test]
    fn commands_list_every_keyword() {
        let commands = render_commands(&MacroFigures::reference());

        for keyword in ["'global'", "'us'", "'table'", "'plot'", "'price'", "'quit'"] {
            assert!(commands.contains(keyword), "missing {keyword}");
        }
    }
}
