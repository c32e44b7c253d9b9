use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One anchor of a piecewise-linear wealth distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Share of adults at or below `wealth`, in percent (0–100).
    pub percentile: Decimal,
    /// Net worth threshold in USD. May be negative (net debt).
    pub wealth: Decimal,
}

/// Reasons a set of breakpoints cannot form a [`BreakpointTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreakpointTableError {
    #[error("breakpoint table needs at least two rows, got {0}")]
    TooFewRows(usize),

    #[error("percentile {0} is outside the range 0..=100")]
    PercentileOutOfRange(Decimal),

    #[error("percentiles must be strictly increasing: {previous} is followed by {next}")]
    PercentileNotIncreasing { previous: Decimal, next: Decimal },

    #[error("wealth thresholds must be strictly increasing: {previous} is followed by {next}")]
    WealthNotIncreasing { previous: Decimal, next: Decimal },
}

/// An ordered, validated sequence of [`Breakpoint`]s.
///
/// Both columns are strictly increasing and every percentile lies in
/// `0..=100`. The table always holds at least two rows, so the first and
/// last rows always exist and every interior value has a bracketing pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>")]
pub struct BreakpointTable {
    rows: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Validates `rows` and wraps them in a table.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointTableError`] if there are fewer than two rows, a
    /// percentile is out of range, or either column is not strictly
    /// increasing.
    pub fn new(rows: Vec<Breakpoint>) -> Result<Self, BreakpointTableError> {
        if rows.len() < 2 {
            return Err(BreakpointTableError::TooFewRows(rows.len()));
        }

        let hundred = Decimal::ONE_HUNDRED;
        if let Some(bad) = rows
            .iter()
            .find(|row| row.percentile < Decimal::ZERO || row.percentile > hundred)
        {
            return Err(BreakpointTableError::PercentileOutOfRange(bad.percentile));
        }

        for pair in rows.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if next.percentile <= previous.percentile {
                return Err(BreakpointTableError::PercentileNotIncreasing {
                    previous: previous.percentile,
                    next: next.percentile,
                });
            }
            if next.wealth <= previous.wealth {
                return Err(BreakpointTableError::WealthNotIncreasing {
                    previous: previous.wealth,
                    next: next.wealth,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Builds a table from `(percentile, wealth)` pairs.
    pub fn from_pairs(pairs: &[(Decimal, Decimal)]) -> Result<Self, BreakpointTableError> {
        Self::new(
            pairs
                .iter()
                .map(|&(percentile, wealth)| Breakpoint { percentile, wealth })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Breakpoint] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// False for every table built through [`BreakpointTable::new`], which
    /// requires at least two rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest row (smallest percentile and wealth).
    pub fn first(&self) -> Breakpoint {
        self.rows[0]
    }

    /// Highest row (largest percentile and wealth).
    pub fn last(&self) -> Breakpoint {
        self.rows[self.rows.len() - 1]
    }

    /// Consecutive row pairs, lowest first.
    pub fn segments(&self) -> impl Iterator<Item = (Breakpoint, Breakpoint)> + '_ {
        self.rows.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// The row stored at exactly `percentile`, if any.
    pub fn at_percentile(
        &self,
        percentile: Decimal,
    ) -> Option<Breakpoint> {
        self.rows
            .iter()
            .copied()
            .find(|row| row.percentile == percentile)
    }
}

impl TryFrom<Vec<Breakpoint>> for BreakpointTable {
    type Error = BreakpointTableError;

    fn try_from(rows: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}
