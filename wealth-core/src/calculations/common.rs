//! Formatting helpers shared by the summary table, result view and chart.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Number of decimal places used to display an asset quantity.
pub const ASSET_DECIMALS: u32 = 8;

/// Picks how many decimals a percentage needs to stay readable.
///
/// Smaller magnitudes get more decimals so that tiny shares of supply do
/// not all collapse to `0.000%`.
///
/// | value            | decimals |
/// |------------------|----------|
/// | ≥ 1              | 3        |
/// | [0.1, 1)         | 4        |
/// | [0.01, 0.1)      | 5        |
/// | [0.001, 0.01)    | 6        |
/// | [0.0001, 0.001)  | 7        |
/// | < 0.0001         | 8        |
pub fn percentage_decimals(value: Decimal) -> u32 {
    if value >= Decimal::ONE {
        3
    } else if value >= dec!(0.1) {
        4
    } else if value >= dec!(0.01) {
        5
    } else if value >= dec!(0.001) {
        6
    } else if value >= dec!(0.0001) {
        7
    } else {
        8
    }
}

/// Formats a percentage with [`percentage_decimals`] places and a `%` suffix.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wealth_core::calculations::common::format_percentage;
///
/// assert_eq!(format_percentage(dec!(2.5)), "2.500%");
/// assert_eq!(format_percentage(dec!(0.05)), "0.05000%");
/// ```
pub fn format_percentage(value: Decimal) -> String {
    let decimals = percentage_decimals(value);
    format!("{}%", fixed(value, decimals))
}

/// Formats an asset quantity with [`ASSET_DECIMALS`] places.
pub fn format_units(value: Decimal) -> String {
    fixed(value, ASSET_DECIMALS)
}

/// Formats a USD amount with thousands separators, e.g. `-$1,234.50`.
pub fn format_usd(
    value: Decimal,
    decimals: u32,
) -> String {
    let rounded = fixed(value.abs(), decimals);
    let (whole, fraction) = match rounded.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rounded.as_str(), None),
    };

    let grouped = group_thousands(whole);
    let sign = if value.is_sign_negative() && !rounded.chars().all(|c| c == '0' || c == '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Compact millions for labels: `21000000` → `"21M"`, `6300000` → `"6.3M"`.
///
/// One decimal at most, trailing zeros dropped.
pub fn format_millions(value: Decimal) -> String {
    let millions = (value / dec!(1000000))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{millions}M")
}

/// Rounds half away from zero and renders exactly `decimals` places.
pub fn fixed(
    value: Decimal,
    decimals: u32,
) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", decimals as usize, rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
