use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rust_decimal::Decimal;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use wealth_cli::Session;
use wealth_cli::app;
use wealth_cli::logging;
use wealth_core::price::PriceSourceConfig;
use wealth_core::{CalculatorState, ScenarioKind, ScenarioSet};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// How much bitcoin is your net worth?
///
/// Places a net worth in the global or US wealth distribution and converts
/// it into the share of the total BTC supply it would command if all wealth
/// were held in bitcoin.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Scenario to start in: `global` or `us`.
    #[arg(long, default_value = "global", value_parser = parse_scenario)]
    scenario: ScenarioKind,

    /// Skip live price lookups entirely.
    #[arg(long)]
    offline: bool,

    /// Price backend to use (`coingecko` or `fixed`).
    #[arg(long, default_value = "coingecko")]
    price_source: String,

    /// Override the backend's URL.
    #[arg(long)]
    price_url: Option<String>,

    /// Seconds to wait for a live price.
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,

    /// USD price used when a live lookup fails; also what `fixed` serves.
    #[arg(long, default_value = "100000")]
    fallback_price: Decimal,

    /// Log filter, e.g. `info` or `wealth_core=debug`. `RUST_LOG` wins.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_scenario(s: &str) -> Result<ScenarioKind, String> {
    ScenarioKind::parse(s).ok_or_else(|| format!("unknown scenario '{s}'; expected global or us"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(cli));
    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let scenarios = ScenarioSet::reference()?;
    let mut session = Session::new(scenarios, CalculatorState::new(cli.scenario));

    if cli.offline {
        debug!("offline, live price disabled");
    } else {
        let config = PriceSourceConfig {
            backend: cli.price_source.to_ascii_lowercase(),
            endpoint: cli.price_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            fixed_price: cli.fallback_price,
        };
        let source = app::build_registry().create(&config)?;
        session = session.with_price_source(source, config.timeout, cli.fallback_price);
    }

    let mut stdout = tokio::io::stdout();
    stdout.write_all(session.header().as_bytes()).await?;
    if let Some(line) = session.refresh_price().await {
        stdout.write_all(format!("{line}\n").as_bytes()).await?;
    }

    let shutdown = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let exit = session.run(stdin, &mut stdout, shutdown).await?;
    debug!(?exit, "session ended");
    Ok(())
}
