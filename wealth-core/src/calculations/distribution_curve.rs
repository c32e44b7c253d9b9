//! Sampling the asset-needed curve for the chart.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::calculations::asset_share::needed_asset_share;
use crate::calculations::interpolation::wealth_from_percentile;
use crate::models::Scenario;

pub const CURVE_START: Decimal = dec!(1);
pub const CURVE_END: Decimal = dec!(99.9);
pub const CURVE_SAMPLES: usize = 50;

/// Samples at or below this many units make up the zoomed view.
pub const ZOOM_CEILING: Decimal = Decimal::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurvePoint {
    pub percentile: Decimal,
    pub wealth: Decimal,
    pub asset_needed: Decimal,
}

/// `samples` evenly spaced values from `start` to `end`, both included.
pub fn linspace(
    start: Decimal,
    end: Decimal,
    samples: usize,
) -> Vec<Decimal> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / Decimal::from(n - 1);
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * Decimal::from(i) })
                .collect()
        }
    }
}

/// Asset needed at each of `samples` percentiles between [`CURVE_START`]
/// and [`CURVE_END`].
pub fn distribution_curve(
    scenario: &Scenario,
    samples: usize,
) -> Vec<CurvePoint> {
    linspace(CURVE_START, CURVE_END, samples)
        .into_iter()
        .map(|percentile| {
            let wealth = wealth_from_percentile(percentile, &scenario.table);
            CurvePoint {
                percentile,
                wealth,
                asset_needed: needed_asset_share(wealth, scenario).asset_needed,
            }
        })
        .collect()
}

/// The points whose asset quantity does not exceed `ceiling`.
pub fn zoomed(
    points: &[CurvePoint],
    ceiling: Decimal,
) -> Vec<CurvePoint> {
    points
        .iter()
        .copied()
        .filter(|p| p.asset_needed <= ceiling)
        .collect()
}
