//! Session state for the calculator.
//!
//! Holds the only mutable data in a session: which scenario is active and
//! the most recent price lookup. Calculations never read this directly; the
//! caller resolves the active [`Scenario`] and passes it in.

use rust_decimal::Decimal;
use tracing::info;

use crate::models::{Scenario, ScenarioKind, ScenarioSet};
use crate::price::PriceOutcome;

/// Created once at startup and owned by the interactive session.
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    scenario: ScenarioKind,
    price: Option<PriceOutcome>,
}

impl CalculatorState {
    pub fn new(scenario: ScenarioKind) -> Self {
        Self {
            scenario,
            price: None,
        }
    }

    pub fn scenario(&self) -> ScenarioKind {
        self.scenario
    }

    /// The active scenario's data within `scenarios`.
    pub fn active<'a>(
        &self,
        scenarios: &'a ScenarioSet,
    ) -> &'a Scenario {
        scenarios.get(self.scenario)
    }

    /// Selects `kind`. Switching to the current scenario is a no-op.
    /// Returns whether the selection changed.
    pub fn switch_to(
        &mut self,
        kind: ScenarioKind,
    ) -> bool {
        let changed = self.scenario != kind;
        if changed {
            info!(from = self.scenario.as_str(), to = kind.as_str(), "switched scenario");
        }
        self.scenario = kind;
        changed
    }

    /// Stores the latest price lookup, replacing any earlier one.
    pub fn set_price(
        &mut self,
        outcome: PriceOutcome,
    ) {
        self.price = Some(outcome);
    }

    pub fn price_outcome(&self) -> Option<&PriceOutcome> {
        self.price.as_ref()
    }

    /// Price from the latest lookup, live or fallback.
    pub fn current_price(&self) -> Option<Decimal> {
        self.price.as_ref().map(PriceOutcome::price)
    }
}
