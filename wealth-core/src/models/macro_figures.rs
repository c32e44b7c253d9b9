use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reference_data::{
    ASSET_SUPPLY, GLOBAL_ADULTS, GLOBAL_WEALTH, NATIONAL_ADULTS, NATIONAL_WEALTH_SHARE,
};
use super::scenario::ScenarioConstants;

/// The handful of macro figures every scenario constant is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroFigures {
    pub global_wealth: Decimal,
    pub global_adults: Decimal,
    pub asset_supply: Decimal,
    pub national_adults: Decimal,
    /// Fraction (0–1) of global wealth held nationally.
    pub national_wealth_share: Decimal,
}

impl MacroFigures {
    /// The compiled-in reference figures.
    pub fn reference() -> Self {
        Self {
            global_wealth: GLOBAL_WEALTH,
            global_adults: GLOBAL_ADULTS,
            asset_supply: ASSET_SUPPLY,
            national_adults: NATIONAL_ADULTS,
            national_wealth_share: NATIONAL_WEALTH_SHARE,
        }
    }

    pub fn global_constants(&self) -> ScenarioConstants {
        ScenarioConstants::new(self.global_wealth, self.asset_supply)
    }

    /// National wealth and supply are the global figures scaled by the same
    /// share, so the derived price equals the global one.
    pub fn national_constants(&self) -> ScenarioConstants {
        ScenarioConstants::new(self.national_wealth(), self.national_supply())
    }

    pub fn national_wealth(&self) -> Decimal {
        self.global_wealth * self.national_wealth_share
    }

    pub fn national_supply(&self) -> Decimal {
        self.asset_supply * self.national_wealth_share
    }

    /// National adults as a fraction (0–1) of global adults.
    pub fn national_population_share(&self) -> Decimal {
        self.national_adults / self.global_adults
    }
}

impl Default for MacroFigures {
    fn default() -> Self {
        Self::reference()
    }
}
