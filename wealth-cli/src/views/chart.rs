//! Plain-text charts of the asset-needed curve.
//!
//! The main view plots every sample on a log-scaled y axis; samples at or
//! below zero cannot be placed on it and are counted instead. The zoomed
//! view uses a linear axis for the samples needing at most one unit.

use rust_decimal::prelude::ToPrimitive;
use wealth_core::Scenario;
use wealth_core::calculations::distribution_curve::{CURVE_SAMPLES, ZOOM_CEILING};
use wealth_core::calculations::{CurvePoint, distribution_curve, zoomed};

use super::ASSET_TICKER;

/// Rows in the plotting area.
pub const PLOT_HEIGHT: usize = 12;

const GUTTER: usize = 10;
const MARK: char = '*';

#[derive(Debug, Clone, Copy)]
enum Axis {
    Log,
    Linear,
}

impl Axis {
    fn project(
        self,
        value: f64,
    ) -> Option<f64> {
        match self {
            Self::Log => (value > 0.0).then(|| value.log10()),
            Self::Linear => Some(value),
        }
    }

    fn unproject(
        self,
        value: f64,
    ) -> f64 {
        match self {
            Self::Log => 10f64.powf(value),
            Self::Linear => value,
        }
    }
}

/// Both chart views for `scenario`.
pub fn render_chart(scenario: &Scenario) -> String {
    let points = distribution_curve(scenario, CURVE_SAMPLES);
    let label = scenario.kind.label();

    let mut out = format!("\n=== Bitcoin Needed vs {label} Wealth Percentile (log scale) ===\n");
    let (lines, omitted) = plot(&points, Axis::Log);
    out.push_str(&lines.join("\n"));
    out.push('\n');
    if omitted > 0 {
        out.push_str(&format!(
            "({omitted} samples at or below zero {ASSET_TICKER} not shown)\n"
        ));
    }

    let small = zoomed(&points, ZOOM_CEILING);
    out.push_str(&format!(
        "\n=== Zoomed: samples needing at most {} {ASSET_TICKER} (linear) ===\n",
        ZOOM_CEILING.normalize()
    ));
    if small.is_empty() {
        out.push_str("No samples in range.\n");
    } else {
        let (lines, _) = plot(&small, Axis::Linear);
        out.push_str(&lines.join("\n"));
        out.push('\n');
    }
    out.push_str(&format!("x: {label} wealth percentile, y: {ASSET_TICKER} needed\n\n"));
    out
}

/// Draws one column per point. Returns the lines and the number of points
/// that could not be placed on `axis`.
fn plot(
    points: &[CurvePoint],
    axis: Axis,
) -> (Vec<String>, usize) {
    let ys: Vec<Option<f64>> = points
        .iter()
        .map(|p| p.asset_needed.to_f64().and_then(|v| axis.project(v)))
        .collect();
    let omitted = ys.iter().filter(|y| y.is_none()).count();

    let (lo, hi) = ys
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)));
    if !lo.is_finite() {
        return (vec!["No plottable samples.".to_string()], omitted);
    }
    let span = if hi > lo { hi - lo } else { 1.0 };
    let top = PLOT_HEIGHT - 1;

    let levels: Vec<Option<usize>> = ys
        .iter()
        .map(|y| y.map(|y| (((y - lo) / span) * top as f64).round() as usize))
        .collect();

    let mut lines = Vec::with_capacity(PLOT_HEIGHT + 2);
    for level in (0..PLOT_HEIGHT).rev() {
        let tick = if level == top || level == 0 || level == top / 2 {
            let value = axis.unproject(lo + span * level as f64 / top as f64);
            format!("{value:>width$.2e}", width = GUTTER)
        } else {
            " ".repeat(GUTTER)
        };
        let cells: String = levels
            .iter()
            .map(|l| if *l == Some(level) { MARK } else { ' ' })
            .collect();
        lines.push(format!("{tick} |{cells}"));
    }
    lines.push(format!("{} +{}", " ".repeat(GUTTER), "-".repeat(points.len())));

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        let first = first.percentile.round_dp(1).normalize().to_string();
        let last = last.percentile.round_dp(1).normalize().to_string();
        let pad = points.len().saturating_sub(last.len());
        lines.push(format!("{}  {first:<pad$}{last}", " ".repeat(GUTTER)));
    }

    (lines, omitted)
}
