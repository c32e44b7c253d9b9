//! Compiled-in reference figures.
//!
//! Global data comes from the UBS Global Wealth Report 2024 (3.767 billion
//! adults holding $449.9 trillion). National data is the United States
//! distribution from the Federal Reserve Survey of Consumer Finances.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Total household wealth worldwide, USD.
pub const GLOBAL_WEALTH: Decimal = dec!(449900000000000);

/// Adult population worldwide.
pub const GLOBAL_ADULTS: Decimal = dec!(3767000000);

/// Fixed asset supply in whole units (21 million BTC).
pub const ASSET_SUPPLY: Decimal = dec!(21000000);

/// Estimated adult population of the United States.
pub const NATIONAL_ADULTS: Decimal = dec!(260000000);

/// Fraction of global wealth held in the United States. Applied to both
/// wealth and supply when deriving the national scenario.
pub const NATIONAL_WEALTH_SHARE: Decimal = dec!(0.30);

/// Price used when no live quote can be obtained, USD per unit.
pub const FALLBACK_PRICE_USD: Decimal = dec!(100000);

/// `(percentile, wealth)` anchors of the global distribution.
pub const GLOBAL_BREAKPOINTS: [(Decimal, Decimal); 17] = [
    (dec!(0), dec!(-5000)),
    (dec!(10), dec!(1500)), // within the <$10k band
    (dec!(20), dec!(3500)),
    (dec!(30), dec!(6000)),
    (dec!(39.5), dec!(10000)), // UBS band boundary
    (dec!(50), dec!(25000)),   // estimated median
    (dec!(60), dec!(40000)),
    (dec!(70), dec!(60000)),
    (dec!(80), dec!(85000)),
    (dec!(82.2), dec!(100000)), // UBS band boundary
    (dec!(90), dec!(200000)),
    (dec!(95), dec!(500000)),
    (dec!(98.5), dec!(1000000)), // top 1.5%
    (dec!(99), dec!(1500000)),
    (dec!(99.5), dec!(5000000)),
    (dec!(99.9), dec!(25000000)),
    (dec!(100), dec!(100000000)),
];

/// `(percentile, wealth)` anchors of the United States distribution.
pub const NATIONAL_BREAKPOINTS: [(Decimal, Decimal); 11] = [
    (dec!(0), dec!(-10000)),
    (dec!(10), dec!(0)),
    (dec!(25), dec!(15000)),
    (dec!(50), dec!(121000)), // median
    (dec!(75), dec!(403000)),
    (dec!(90), dec!(1200000)),
    (dec!(95), dec!(2400000)),
    (dec!(99), dec!(11100000)),
    (dec!(99.5), dec!(21000000)),
    (dec!(99.9), dec!(43200000)),
    (dec!(100), dec!(500000000)),
];

/// Percentiles listed by the `table` command for the global scenario.
pub const GLOBAL_TABLE_PERCENTILES: [Decimal; 14] = [
    dec!(1),
    dec!(5),
    dec!(10),
    dec!(25),
    dec!(39.5),
    dec!(50),
    dec!(75),
    dec!(82.2),
    dec!(90),
    dec!(95),
    dec!(98.5),
    dec!(99),
    dec!(99.5),
    dec!(99.9),
];

/// Percentiles listed by the `table` command for the national scenario.
pub const NATIONAL_TABLE_PERCENTILES: [Decimal; 11] = [
    dec!(1),
    dec!(5),
    dec!(10),
    dec!(25),
    dec!(50),
    dec!(75),
    dec!(90),
    dec!(95),
    dec!(99),
    dec!(99.5),
    dec!(99.9),
];
