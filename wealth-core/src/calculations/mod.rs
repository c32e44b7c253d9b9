//! Calculations over the breakpoint tables and scenario constants.
//!
//! Everything here is a pure function of its arguments; the active scenario
//! is always passed in explicitly.

pub mod asset_share;
pub mod common;
pub mod distribution_curve;
pub mod interpolation;
pub mod percentile_table;

pub use asset_share::{AssetShare, needed_asset_share};
pub use common::format_percentage;
pub use distribution_curve::{CurvePoint, distribution_curve, zoomed};
pub use interpolation::{percentile_from_wealth, wealth_from_percentile};
pub use percentile_table::{PercentileRow, percentile_table, supply_column_label};
