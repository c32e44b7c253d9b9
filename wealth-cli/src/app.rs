//! The interactive session.
//!
//! [`Session`] owns everything mutable for one run: the
//! [`CalculatorState`] and the optional live price source. Each input line
//! is parsed into a [`Command`], applied, and answered with text; rendering
//! lives in [`crate::views`].

use std::future::Future;
use std::io;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use wealth_core::price::{
    DEFAULT_TIMEOUT, FALLBACK_PRICE_USD, FixedPriceSourceFactory, PriceSourceRegistry,
    fetch_or_fallback,
};
use wealth_core::{CalculatorState, PriceSource, ScenarioSet, needed_asset_share};
use wealth_price::CoinGeckoSourceFactory;

use crate::command::Command;
use crate::views::{chart, header, price, result, scenario, table};

pub const PROMPT: &str = "Input: ";
pub const FAREWELL: &str = "Goodbye!\n";

/// Registry with every price backend this binary ships.
pub fn build_registry() -> PriceSourceRegistry {
    let mut registry = PriceSourceRegistry::new();
    registry.register(Box::new(CoinGeckoSourceFactory));
    registry.register(Box::new(FixedPriceSourceFactory));
    registry
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// `quit` or `exit` was entered.
    Quit,
    /// Input closed.
    EndOfInput,
    /// The shutdown signal won the race against the next line.
    Interrupted,
}

pub struct Session {
    scenarios: ScenarioSet,
    state: CalculatorState,
    price_source: Option<Box<dyn PriceSource>>,
    timeout: Duration,
    fallback_price: Decimal,
}

impl Session {
    /// A session without a live price source; `price` only reports that.
    pub fn new(
        scenarios: ScenarioSet,
        state: CalculatorState,
    ) -> Self {
        Self {
            scenarios,
            state,
            price_source: None,
            timeout: DEFAULT_TIMEOUT,
            fallback_price: FALLBACK_PRICE_USD,
        }
    }

    /// Enables live lookups from `source`, bounded by `timeout`, with
    /// `fallback_price` used whenever a lookup fails.
    pub fn with_price_source(
        mut self,
        source: Box<dyn PriceSource>,
        timeout: Duration,
        fallback_price: Decimal,
    ) -> Self {
        self.price_source = Some(source);
        self.timeout = timeout;
        self.fallback_price = fallback_price;
        self
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn scenarios(&self) -> &ScenarioSet {
        &self.scenarios
    }

    pub fn header(&self) -> String {
        header::render_header(&self.scenarios)
    }

    /// Looks up the current price and caches it in the state. Returns the
    /// line to show, or `None` when no source is configured.
    pub async fn refresh_price(&mut self) -> Option<String> {
        let source = self.price_source.as_deref()?;
        let outcome = fetch_or_fallback(source, self.timeout, self.fallback_price).await;
        let text = price::render_price(&outcome);
        self.state.set_price(outcome);
        Some(text)
    }

    /// Applies one line of input and returns the text to print.
    pub async fn handle_line(
        &mut self,
        line: &str,
    ) -> (String, Flow) {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(input = %err.input, reason = %err.source, "rejected input");
                return (format!("{err}\n\n"), Flow::Continue);
            }
        };

        let text = match command {
            Command::NetWorth(net_worth) => {
                let share = needed_asset_share(net_worth, self.state.active(&self.scenarios));
                result::render_result(&share, &self.scenarios.figures, self.state.price_outcome())
            }
            Command::Switch(kind) => {
                self.state.switch_to(kind);
                scenario::render_switch(kind, &self.scenarios)
            }
            Command::Table => {
                table::render_table(self.state.active(&self.scenarios), self.state.price_outcome())
            }
            Command::Plot => chart::render_chart(self.state.active(&self.scenarios)),
            Command::RefreshPrice => match self.refresh_price().await {
                Some(text) => text,
                None => "Live price lookup is disabled.\n".to_string(),
            },
            Command::Help => header::render_commands(&self.scenarios.figures),
            Command::Quit => return (FAREWELL.to_string(), Flow::Quit),
        };
        (text, Flow::Continue)
    }

    /// Reads commands from `input` until `quit`, end of input, or
    /// `shutdown` completes, writing prompts and replies to `output`.
    ///
    /// # Errors
    ///
    /// Only I/O errors on `input` or `output` end the session early.
    pub async fn run<R, W, F>(
        &mut self,
        input: R,
        output: &mut W,
        shutdown: F,
    ) -> io::Result<Exit>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        let mut lines = input.lines();
        tokio::pin!(shutdown);

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let line = tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!("interrupted");
                    output.write_all(format!("\n{FAREWELL}").as_bytes()).await?;
                    output.flush().await?;
                    return Ok(Exit::Interrupted);
                }
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                output.write_all(format!("\n{FAREWELL}").as_bytes()).await?;
                output.flush().await?;
                return Ok(Exit::EndOfInput);
            };

            let (text, flow) = self.handle_line(&line).await;
            output.write_all(text.as_bytes()).await?;
            output.flush().await?;
            if flow == Flow::Quit {
                return Ok(Exit::Quit);
            }
        }
    }
}
