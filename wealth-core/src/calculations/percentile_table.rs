//! Rows for the per-percentile summary table.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::asset_share::needed_asset_share;
use crate::calculations::common::format_millions;
use crate::calculations::interpolation::wealth_from_percentile;
use crate::models::{Scenario, ScenarioKind};

/// One line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PercentileRow {
    pub percentile: Decimal,
    pub wealth_threshold: Decimal,
    pub asset_needed: Decimal,
    pub supply_fraction: Decimal,
    /// Cost of `asset_needed` at the current market price. `None` without a
    /// price, or when the cost overflows.
    pub cost_at_price: Option<Decimal>,
}

/// Builds a row for each of the scenario's listed percentiles.
///
/// # Arguments
///
/// * `scenario` - Scenario whose `table_percentiles` become the rows
/// * `current_price` - Market price per unit in USD, if one is known
///
/// # Returns
///
/// One [`PercentileRow`] per listed percentile, in ascending order. Each
/// threshold is interpolated from the scenario's breakpoints, so rows at
/// stored breakpoints carry the stored wealth exactly.
pub fn percentile_table(
    scenario: &Scenario,
    current_price: Option<Decimal>,
) -> Vec<PercentileRow> {
    scenario
        .table_percentiles
        .iter()
        .map(|&percentile| {
            let wealth_threshold = wealth_from_percentile(percentile, &scenario.table);
            let share = needed_asset_share(wealth_threshold, scenario);
            PercentileRow {
                percentile,
                wealth_threshold,
                asset_needed: share.asset_needed,
                supply_fraction: share.supply_fraction,
                cost_at_price: current_price.and_then(|price| share.cost_at(price)),
            }
        })
        .collect()
}

/// Header for the supply-fraction column, sized from the scenario's supply.
pub fn supply_column_label(scenario: &Scenario) -> String {
    let supply = format_millions(scenario.constants.asset_supply);
    match scenario.kind {
        ScenarioKind::Global => format!("% of Total Supply ({supply})"),
        ScenarioKind::National => format!("% of US Allocation ({supply})"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{MacroFigures, ScenarioSet};

    #[test]
    fn global_table_lists_fourteen_rows() {
        let set = ScenarioSet::reference().unwrap();
        let rows = percentile_table(&set.global, None);

        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0].percentile, dec!(1));
        assert_eq!(rows[13].percentile, dec!(99.9));
    }

    #[test]
    fn national_table_lists_eleven_rows() {
        let set = ScenarioSet::reference().unwrap();

        assert_eq!(percentile_table(&set.national, None).len(), 11);
    }

    #[test]
    fn anchor_rows_use_stored_thresholds() {
        let set = ScenarioSet::reference().unwrap();
        let rows = percentile_table(&set.global, None);
        let median = rows.iter().find(|r| r.percentile == dec!(50)).unwrap();

        assert_eq!(median.wealth_threshold, dec!(25000));
    }

    #[test]
    fn rows_are_non_decreasing() {
        let set = ScenarioSet::reference().unwrap();
        let rows = percentile_table(&set.national, None);

        for pair in rows.windows(2) {
            assert!(pair[0].asset_needed <= pair[1].asset_needed);
        }
    }

    #[test]
    fn cost_column_present_only_with_price() {
        let set = ScenarioSet::reference().unwrap();

        assert!(percentile_table(&set.global, None).iter().all(|r| r.cost_at_price.is_none()));

        let priced = percentile_table(&set.global, Some(dec!(100000)));
        let top = priced.last().unwrap();
        assert_eq!(top.cost_at_price, Some(top.asset_needed * dec!(100000)));
    }

    #[test]
    fn supply_labels_name_the_pool() {
        let set = ScenarioSet::reference().unwrap();

        assert_eq!(supply_column_label(&set.global), "% of Total Supply (21M)");
        assert_eq!(supply_column_label(&set.national), "% of US Allocation (6.3M)");
    }

    #[test]
    fn supply_label_follows_the_figures() {
        let figures = MacroFigures {
            national_wealth_share: dec!(0.25),
            ..MacroFigures::reference()
        };
        let set = ScenarioSet::from_figures(figures).unwrap();

        assert_eq!(supply_column_label(&set.national), "% of US Allocation (5.3M)");
    }

    #[test]
    fn overflowing_cost_is_left_out() {
        let set = ScenarioSet::reference().unwrap();

        let rows = percentile_table(&set.global, Some(Decimal::MAX));

        // The top row needs more than one unit, so its cost exceeds the range.
        assert!(rows[0].cost_at_price.is_some());
        assert_eq!(rows.last().unwrap().cost_at_price, None);
    }
}
