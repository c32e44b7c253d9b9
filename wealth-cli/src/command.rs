//! The interactive command language.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use wealth_core::ScenarioKind;

use crate::utils::{ParseNetWorthError, parse_net_worth};

/// One line of user input, interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Look up a net worth under the active scenario.
    NetWorth(Decimal),
    Switch(ScenarioKind),
    Table,
    Plot,
    RefreshPrice,
    Help,
    Quit,
}

/// Input that is neither a keyword nor a usable number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", user_message(.source))]
pub struct CommandError {
    pub input: String,
    #[source]
    pub source: ParseNetWorthError,
}

fn user_message(source: &ParseNetWorthError) -> &'static str {
    match source {
        ParseNetWorthError::OutOfRange { .. } => {
            "That amount is outside the range this calculator supports."
        }
        ParseNetWorthError::Empty | ParseNetWorthError::Invalid { .. } => {
            "Please enter a valid number or command."
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Keywords are case-insensitive; anything else is read as an amount.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_ascii_lowercase();
        if let Some(kind) = ScenarioKind::parse(&keyword) {
            return Ok(Self::Switch(kind));
        }

        match keyword.as_str() {
            "quit" | "exit" => Ok(Self::Quit),
            "table" => Ok(Self::Table),
            "plot" => Ok(Self::Plot),
            "price" => Ok(Self::RefreshPrice),
            "help" | "?" => Ok(Self::Help),
            _ => parse_net_worth(s)
                .map(Self::NetWorth)
                .map_err(|source| CommandError {
                    input: s.trim().to_string(),
                    source,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!("QUIT".parse(), Ok(Command::Quit));
        assert_eq!(" Table ".parse(), Ok(Command::Table));
        assert_eq!("plot".parse(), Ok(Command::Plot));
        assert_eq!("price".parse(), Ok(Command::RefreshPrice));
        assert_eq!("help".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn scenario_keywords_switch() {
        assert_eq!("global".parse(), Ok(Command::Switch(ScenarioKind::Global)));
        assert_eq!("US".parse(), Ok(Command::Switch(ScenarioKind::National)));
        assert_eq!("national".parse(), Ok(Command::Switch(ScenarioKind::National)));
    }

    #[test]
    fn amounts_become_lookups() {
        assert_eq!("$1,000,000".parse(), Ok(Command::NetWorth(dec!(1000000))));
    }

    #[test]
    fn garbage_reports_input_and_cause() {
        let err = "abc".parse::<Command>().unwrap_err();

        assert_eq!(err.input, "abc");
        assert!(matches!(err.source, ParseNetWorthError::Invalid { .. }));
        assert_eq!(err.to_string(), "Please enter a valid number or command.");
    }

    #[test]
    fn huge_amount_gets_its_own_message() {
        let err = "1e30".parse::<Command>().unwrap_err();

        assert!(matches!(err.source, ParseNetWorthError::OutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "That amount is outside the range this calculator supports."
        );
    }

    #[test]
    fn blank_line_is_an_error() {
        assert_eq!(
            "   ".parse::<Command>().map_err(|e| e.source),
            Err(ParseNetWorthError::Empty)
        );
    }
}
