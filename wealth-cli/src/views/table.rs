use wealth_core::calculations::common::{format_percentage, format_units, format_usd};
use wealth_core::calculations::{percentile_table, supply_column_label};
use wealth_core::{PriceOutcome, Scenario};

use super::price::price_label;

/// Summary table for the scenario's listed percentiles, right-aligned.
///
/// A cost column is added when a price (live or fallback) is known; a cost
/// too large to compute shows as `n/a`.
pub fn render_table(
    scenario: &Scenario,
    price: Option<&PriceOutcome>,
) -> String {
    let rows = percentile_table(scenario, price.map(PriceOutcome::price));

    let mut header = vec![
        format!("{} Percentile", scenario.kind.label()),
        "Net Worth Threshold".to_string(),
        "Bitcoin Needed".to_string(),
        supply_column_label(scenario),
    ];
    if let Some(outcome) = price {
        header.push(format!("Cost at {}", price_label(outcome)));
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                format!("{}%", row.percentile.normalize()),
                format_usd(row.wealth_threshold, 0),
                format_units(row.asset_needed),
                format_percentage(row.supply_fraction),
            ];
            if price.is_some() {
                let cost = row.cost_at_price.map(|cost| format_usd(cost, 2));
                cells.push(cost.unwrap_or_else(|| "n/a".to_string()));
            }
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            body.iter()
                .map(|cells| cells[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = format!(
        "\n=== Bitcoin Needed by {} Percentile ===\n",
        scenario.kind.label()
    );
    for cells in std::iter::once(&header).chain(body.iter()) {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out
}
