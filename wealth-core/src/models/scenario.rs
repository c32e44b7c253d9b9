use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakpoint::{BreakpointTable, BreakpointTableError};
use super::macro_figures::MacroFigures;
use super::reference_data::{
    GLOBAL_BREAKPOINTS, GLOBAL_TABLE_PERCENTILES, NATIONAL_BREAKPOINTS,
    NATIONAL_TABLE_PERCENTILES,
};

/// Which reference distribution is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScenarioKind {
    #[default]
    Global,
    National,
}

impl ScenarioKind {
    /// Command keyword for the scenario.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::National => "us",
        }
    }

    /// Short display name, used in table headers and axis labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::National => "US",
        }
    }

    /// Name of the data set behind the scenario.
    pub fn data_source(&self) -> &'static str {
        match self {
            Self::Global => "Global (UBS 2024)",
            Self::National => "US (Fed SCF)",
        }
    }

    /// Accepts the command keywords, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Some(Self::Global),
            "us" | "national" => Some(Self::National),
            _ => None,
        }
    }
}

/// Wealth, supply and the price they imply for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConstants {
    pub total_wealth: Decimal,
    pub asset_supply: Decimal,
    /// `total_wealth / asset_supply`, USD per unit.
    pub asset_price: Decimal,
}

impl ScenarioConstants {
    pub fn new(
        total_wealth: Decimal,
        asset_supply: Decimal,
    ) -> Self {
        Self {
            total_wealth,
            asset_supply,
            asset_price: total_wealth / asset_supply,
        }
    }
}

/// A breakpoint table bundled with the constants it is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub table: BreakpointTable,
    pub constants: ScenarioConstants,
    /// Percentiles shown by the summary table.
    pub table_percentiles: Vec<Decimal>,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Both scenarios plus the figures they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSet {
    pub figures: MacroFigures,
    pub global: Scenario,
    pub national: Scenario,
}

impl ScenarioSet {
    /// Builds both scenarios from the compiled-in reference data.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointTableError`] if a reference table fails
    /// validation.
    pub fn reference() -> Result<Self, BreakpointTableError> {
        Self::from_figures(MacroFigures::reference())
    }

    /// Builds both scenarios from the reference tables and `figures`.
    pub fn from_figures(figures: MacroFigures) -> Result<Self, BreakpointTableError> {
        let global = Scenario {
            kind: ScenarioKind::Global,
            table: BreakpointTable::from_pairs(&GLOBAL_BREAKPOINTS)?,
            constants: figures.global_constants(),
            table_percentiles: GLOBAL_TABLE_PERCENTILES.to_vec(),
        };
        let national = Scenario {
            kind: ScenarioKind::National,
            table: BreakpointTable::from_pairs(&NATIONAL_BREAKPOINTS)?,
            constants: figures.national_constants(),
            table_percentiles: NATIONAL_TABLE_PERCENTILES.to_vec(),
        };

        Ok(Self {
            figures,
            global,
            national,
        })
    }

    pub fn get(
        &self,
        kind: ScenarioKind,
    ) -> &Scenario {
        match kind {
            ScenarioKind::Global => &self.global,
            ScenarioKind::National => &self.national,
        }
    }
}
