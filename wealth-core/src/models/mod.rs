mod breakpoint;
mod macro_figures;
pub mod reference_data;
mod scenario;

pub use breakpoint::{Breakpoint, BreakpointTable, BreakpointTableError};
pub use macro_figures::MacroFigures;
pub use scenario::{Scenario, ScenarioConstants, ScenarioKind, ScenarioSet};
