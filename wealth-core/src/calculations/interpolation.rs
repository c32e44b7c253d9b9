//! Piecewise-linear lookups between percentiles and wealth thresholds.
//!
//! Both directions clamp at the table bounds; nothing is extrapolated.
//! Because the arithmetic is decimal, a stored anchor maps to its partner
//! exactly in both directions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::models::{Breakpoint, BreakpointTable};

/// Percentile reported when no bracketing pair exists. A validated table
/// always has one, so reaching this value indicates a bug.
pub const MEDIAN_PERCENTILE: Decimal = dec!(50);

/// Returns the percentile at which `wealth` sits in `table`.
///
/// Values at or below the lowest threshold return the lowest percentile and
/// values at or above the highest threshold return the highest percentile.
///
/// # Arguments
///
/// * `wealth` - Net worth in USD; may be negative
/// * `table` - Validated breakpoints to interpolate between
///
/// # Returns
///
/// A percentile between the table's lowest and highest percentiles,
/// linearly interpolated inside the bracketing pair of breakpoints.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wealth_core::calculations::percentile_from_wealth;
/// use wealth_core::BreakpointTable;
///
/// let table = BreakpointTable::from_pairs(&[
///     (dec!(0), dec!(0)),
///     (dec!(50), dec!(100)),
///     (dec!(100), dec!(1000)),
/// ])
/// .unwrap();
///
/// assert_eq!(percentile_from_wealth(dec!(50), &table), dec!(25));
/// assert_eq!(percentile_from_wealth(dec!(-10), &table), dec!(0));
/// ```
pub fn percentile_from_wealth(
    wealth: Decimal,
    table: &BreakpointTable,
) -> Decimal {
    let (first, last) = (table.first(), table.last());
    if wealth <= first.wealth {
        return first.percentile;
    }
    if wealth >= last.wealth {
        return last.percentile;
    }

    match table
        .segments()
        .find(|(lo, hi)| lo.wealth <= wealth && wealth <= hi.wealth)
    {
        Some((lo, hi)) => lerp(wealth, (lo.wealth, lo.percentile), (hi.wealth, hi.percentile)),
        None => {
            debug_assert!(false, "validated table has no bracket for wealth {wealth}");
            warn!(%wealth, "no bracketing breakpoints, using median percentile");
            MEDIAN_PERCENTILE
        }
    }
}

/// Returns the wealth threshold at `percentile` in `table`.
///
/// Mirror of [`percentile_from_wealth`] with the same clamping.
pub fn wealth_from_percentile(
    percentile: Decimal,
    table: &BreakpointTable,
) -> Decimal {
    let (first, last) = (table.first(), table.last());
    if percentile <= first.percentile {
        return first.wealth;
    }
    if percentile >= last.percentile {
        return last.wealth;
    }

    match table
        .segments()
        .find(|(lo, hi)| lo.percentile <= percentile && percentile <= hi.percentile)
    {
        Some((lo, hi)) => lerp(
            percentile,
            (lo.percentile, lo.wealth),
            (hi.percentile, hi.wealth),
        ),
        None => {
            debug_assert!(false, "validated table has no bracket for percentile {percentile}");
            warn!(%percentile, "no bracketing breakpoints, using median wealth");
            median_wealth(table)
        }
    }
}

/// Linear interpolation of `x` between `(x0, y0)` and `(x1, y1)`.
/// Callers guarantee `x0 < x1`.
fn lerp(
    x: Decimal,
    (x0, y0): (Decimal, Decimal),
    (x1, y1): (Decimal, Decimal),
) -> Decimal {
    let ratio = (x - x0) / (x1 - x0);
    y0 + ratio * (y1 - y0)
}

fn median_wealth(table: &BreakpointTable) -> Decimal {
    table
        .at_percentile(MEDIAN_PERCENTILE)
        .unwrap_or_else(|| middle_row(table))
        .wealth
}

fn middle_row(table: &BreakpointTable) -> Breakpoint {
    table.rows()[table.len() / 2]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::ScenarioSet;

    fn global_table() -> BreakpointTable {
        ScenarioSet::reference().unwrap().global.table
    }

    fn national_table() -> BreakpointTable {
        ScenarioSet::reference().unwrap().national.table
    }

    // =========================================================================
    // percentile_from_wealth
    // =========================================================================

    #[test]
    fn global_median_wealth_is_fiftieth_percentile() {
        assert_eq!(percentile_from_wealth(dec!(25000), &global_table()), dec!(50));
    }

    #[test]
    fn global_millionaire_is_top_one_and_a_half_percent() {
        assert_eq!(
            percentile_from_wealth(dec!(1000000), &global_table()),
            dec!(98.5)
        );
    }

    #[test]
    fn interpolates_between_anchors() {
        // Halfway between 25,000 (50th) and 40,000 (60th).
        let result = percentile_from_wealth(dec!(32500), &global_table());

        assert_eq!(result, dec!(55));
    }

    #[test]
    fn wealth_below_floor_clamps_to_lowest_percentile() {
        assert_eq!(percentile_from_wealth(dec!(-1000000), &global_table()), dec!(0));
        assert_eq!(percentile_from_wealth(dec!(-5000), &global_table()), dec!(0));
    }

    #[test]
    fn wealth_above_ceiling_clamps_to_highest_percentile() {
        assert_eq!(
            percentile_from_wealth(dec!(1000000000000), &national_table()),
            dec!(100)
        );
    }

    #[test]
    fn national_zero_wealth_is_tenth_percentile() {
        assert_eq!(percentile_from_wealth(Decimal::ZERO, &national_table()), dec!(10));
    }

    // =========================================================================
    // wealth_from_percentile
    // =========================================================================

    #[test]
    fn national_median_is_121k() {
        assert_eq!(wealth_from_percentile(dec!(50), &national_table()), dec!(121000));
    }

    #[test]
    fn interpolates_wealth_between_anchors() {
        // 1st global percentile: a tenth of the way from -5,000 to 1,500.
        let result = wealth_from_percentile(dec!(1), &global_table());

        assert_eq!(result, dec!(-4350));
    }

    #[test]
    fn percentile_outside_range_clamps() {
        let table = global_table();

        assert_eq!(wealth_from_percentile(dec!(-3), &table), dec!(-5000));
        assert_eq!(wealth_from_percentile(dec!(150), &table), dec!(100000000));
    }

    // =========================================================================
    // anchors round-trip exactly
    // =========================================================================

    #[test]
    fn anchors_round_trip_in_both_tables() {
        for table in [global_table(), national_table()] {
            for row in table.rows() {
                assert_eq!(percentile_from_wealth(row.wealth, &table), row.percentile);
                assert_eq!(wealth_from_percentile(row.percentile, &table), row.wealth);
            }
        }
    }

    #[test]
    fn median_wealth_falls_back_to_middle_row_without_fifty() {
        let table = BreakpointTable::from_pairs(&[
            (dec!(0), dec!(1)),
            (dec!(40), dec!(2)),
            (dec!(100), dec!(3)),
        ])
        .unwrap();

        assert_eq!(median_wealth(&table), dec!(2));
    }

    // =========================================================================
    // properties
    // =========================================================================

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_percentile_is_monotonic_in_wealth(
            a in -20_000i64..600_000_000,
            b in -20_000i64..600_000_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for table in [global_table(), national_table()] {
                let p_lo = percentile_from_wealth(Decimal::from(lo), &table);
                let p_hi = percentile_from_wealth(Decimal::from(hi), &table);
                prop_assert!(p_lo <= p_hi, "{lo} -> {p_lo}, {hi} -> {p_hi}");
            }
        }

        #[test]
        fn prop_percentile_stays_within_table_bounds(wealth in any::<i64>()) {
            let table = global_table();
            let p = percentile_from_wealth(Decimal::from(wealth), &table);
            prop_assert!(p >= table.first().percentile);
            prop_assert!(p <= table.last().percentile);
        }

        #[test]
        fn prop_wealth_is_monotonic_in_percentile(
            a in 0u32..=10_000,
            b in 0u32..=10_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // Hundredths of a percent.
            let p_lo = Decimal::new(i64::from(lo), 2);
            let p_hi = Decimal::new(i64::from(hi), 2);
            let table = national_table();
            prop_assert!(wealth_from_percentile(p_lo, &table) <= wealth_from_percentile(p_hi, &table));
        }
    }
}
