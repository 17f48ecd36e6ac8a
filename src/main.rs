//! Command-line entry point: parses arguments, configures logging, loads or
//! downloads the initial market data, enumerates the session's trade loops,
//! and hands off to the refresh loop.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eyre::Result;
use log::info;

use gyre::arb::graph::MarketGraph;
use gyre::arb::scanner::Scanner;
use gyre::bot::Bot;
use gyre::config::Config;
use gyre::exchange::{ExchangeClient, PairInfo};
use gyre::state;
use gyre::utils::logger::setup_logger;

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Resume from a previously saved market snapshot
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the market snapshot written every tick
    #[arg(short, long, default_value = "gyre.json")]
    output: PathBuf,

    /// Starting volume for trades
    #[arg(short, long, default_value_t = 1.0)]
    vol: f64,

    /// Number of seconds between updates
    #[arg(short = 't', long, default_value_t = 60)]
    interval: u64,

    /// Log file
    #[arg(short, long, default_value = "gyre.log")]
    log: PathBuf,

    /// Exchange API base URL
    #[arg(long, default_value = "https://btc-e.com")]
    url: String,

    /// Attempts per API request before giving up
    #[arg(long, default_value_t = 10)]
    retries: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config {
        input: cli.input,
        output: cli.output,
        starting_volume: cli.vol,
        interval: Duration::from_secs(cli.interval),
        log_file: cli.log,
        api_url: cli.url,
        max_attempts: cli.retries,
    };
    setup_logger(&config.log_file)?;

    let mut client = ExchangeClient::new(&config.api_url, config.max_attempts)?;

    // Resume from a snapshot, or download the fee schedule and an initial
    // set of order books. Either way, fees are fixed for the session.
    let books = if let Some(input) = &config.input {
        info!("Loading market snapshot from {}", input.display());
        state::load(input)?
    } else {
        info!("Downloading fee schedule");
        let pairs = client.fetch_pairs().await?;
        info!("Downloading order depth for {} pairs", pairs.len());
        client.fetch_books(&pairs).await?
    };
    let pairs = PairInfo::from_books(&books);

    // Loops are enumerated once against the initial topology and reused for
    // every refresh; a pair appearing or vanishing mid-session is not picked
    // up until restart.
    info!("Constructing possible trade loops");
    let graph = MarketGraph::from_books(&books)?;
    let scanner = Scanner::discover(&graph);
    info!("{} possible trade loops detected", scanner.path_count());

    Bot::new(config, client, scanner, pairs).run().await
}
