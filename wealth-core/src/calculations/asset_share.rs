//! Converting a net worth into the share of the fixed asset supply it is
//! worth under a scenario.
//!
//! | Quantity          | Formula                                   |
//! |-------------------|-------------------------------------------|
//! | asset needed      | net worth ÷ scenario asset price          |
//! | wealth fraction   | net worth ÷ scenario total wealth × 100   |
//! | supply fraction   | asset needed ÷ scenario asset supply × 100|
//! | percentile        | interpolated from the scenario's table    |
//!
//! Negative net worth is accepted: it clamps to the lowest percentile and
//! yields a negative asset quantity.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculations::interpolation::percentile_from_wealth;
use crate::models::{MacroFigures, Scenario, ScenarioKind};

/// Everything the result view needs for one net-worth lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetShare {
    pub net_worth: Decimal,
    pub percentile: Decimal,
    /// Units of the asset equal in value to `net_worth`.
    pub asset_needed: Decimal,
    /// `net_worth` as a percentage of the scenario's total wealth.
    pub wealth_fraction: Decimal,
    /// `asset_needed` as a percentage of the scenario's supply.
    pub supply_fraction: Decimal,
    pub scenario: ScenarioKind,
    pub scenario_label: &'static str,
    pub scenario_wealth: Decimal,
    pub scenario_supply: Decimal,
    pub scenario_price: Decimal,
}

impl AssetShare {
    /// `asset_needed` as a percentage of the whole supply, regardless of the
    /// scenario's allocation.
    pub fn fraction_of_total_supply(
        &self,
        figures: &MacroFigures,
    ) -> Decimal {
        self.asset_needed / figures.asset_supply * Decimal::ONE_HUNDRED
    }

    /// Value of `asset_needed` at the global price, as a percentage of
    /// global wealth.
    pub fn fraction_of_global_wealth(
        &self,
        figures: &MacroFigures,
    ) -> Decimal {
        let global_price = figures.global_constants().asset_price;
        self.asset_needed / figures.global_wealth * global_price * Decimal::ONE_HUNDRED
    }

    /// What `asset_needed` costs at `price` USD per unit, or `None` when the
    /// product does not fit in a [`Decimal`].
    pub fn cost_at(
        &self,
        price: Decimal,
    ) -> Option<Decimal> {
        self.asset_needed.checked_mul(price)
    }
}

/// Computes the [`AssetShare`] for `net_worth` under `scenario`.
///
/// The asset is priced at the scenario's implied price, so the result says
/// how much of the fixed supply the net worth would command if all of the
/// scenario's wealth were held in the asset.
///
/// # Arguments
///
/// * `net_worth` - Net worth in USD; negative values are net debt
/// * `scenario` - Breakpoint table and constants to evaluate against
///
/// # Returns
///
/// The percentile, units needed, wealth and supply fractions, and the
/// scenario totals they were computed from.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wealth_core::{ScenarioSet, needed_asset_share};
///
/// let scenarios = ScenarioSet::reference().unwrap();
/// let share = needed_asset_share(dec!(1000000), &scenarios.global);
///
/// assert_eq!(share.percentile, dec!(98.5));
/// assert_eq!(share.asset_needed.round_dp(5), dec!(0.04668));
/// ```
pub fn needed_asset_share(
    net_worth: Decimal,
    scenario: &Scenario,
) -> AssetShare {
    let constants = &scenario.constants;
    let asset_needed = net_worth / constants.asset_price;
    let wealth_fraction = net_worth / constants.total_wealth * Decimal::ONE_HUNDRED;
    let supply_fraction = asset_needed / constants.asset_supply * Decimal::ONE_HUNDRED;
    let percentile = percentile_from_wealth(net_worth, &scenario.table);

    debug!(
        scenario = scenario.kind.as_str(),
        %net_worth,
        %percentile,
        %asset_needed,
        "computed asset share"
    );

    AssetShare {
        net_worth,
        percentile,
        asset_needed,
        wealth_fraction,
        supply_fraction,
        scenario: scenario.kind,
        scenario_label: scenario.kind.data_source(),
        scenario_wealth: constants.total_wealth,
        scenario_supply: constants.asset_supply,
        scenario_price: constants.asset_price,
    }
}
