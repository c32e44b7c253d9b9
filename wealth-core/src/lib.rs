pub mod calculations;
pub mod models;
pub mod price;
pub mod state;

pub use calculations::{AssetShare, needed_asset_share};
pub use models::*;
pub use price::{PriceError, PriceOutcome, PriceQuote, PriceSource};
pub use state::CalculatorState;
