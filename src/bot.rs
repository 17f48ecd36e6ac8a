//! The refresh loop driving periodic re-scoring of the candidate loops.
//!
//! One logical actor runs everything: fetch, snapshot write, graph rebuild,
//! evaluation, and reporting happen sequentially within each tick. Depth is
//! replaced wholesale per tick, so evaluation always sees one immutable
//! snapshot. The loop runs until Ctrl-C; a fetch that fails after all retry
//! attempts aborts the run with an error.

use eyre::Result;
use log::info;

use crate::arb::graph::MarketGraph;
use crate::arb::scanner::{report, Scanner};
use crate::config::Config;
use crate::exchange::{ExchangeClient, PairInfo};
use crate::state;

/// The periodic scanner: owns the client, the session's candidate loops, and
/// the pair list whose depth gets refreshed each tick.
pub struct Bot {
    /// Runtime configuration
    config: Config,
    /// Exchange API client
    client: ExchangeClient,
    /// Candidate loops, enumerated once at startup
    scanner: Scanner,
    /// The session's tradable pairs with their fees
    pairs: Vec<PairInfo>,
}

impl Bot {
    /// Assembles the bot from its already-initialized parts
    #[must_use]
    pub fn new(
        config: Config,
        client: ExchangeClient,
        scanner: Scanner,
        pairs: Vec<PairInfo>,
    ) -> Self {
        Self {
            config,
            client,
            scanner,
            pairs,
        }
    }

    /// Runs refresh ticks at the configured interval until Ctrl-C.
    ///
    /// # Errors
    /// * If a tick fails (fetch exhausted its retries, or the snapshot or
    ///   graph could not be built)
    pub async fn run(mut self) -> Result<()> {
        let mut ticker = tokio::time::interval(self.config.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick().await?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal, stopping refresh loop");
                    return Ok(());
                }
            }
        }
    }

    /// One refresh tick: fetch depth, persist the snapshot, rebuild the
    /// graph, re-score every candidate loop, and report the opportunities.
    async fn tick(&mut self) -> Result<()> {
        info!("Downloading order depth for {} pairs", self.pairs.len());
        let books = self.client.fetch_books(&self.pairs).await?;

        info!(
            "Saving new market snapshot to {}",
            self.config.output.display()
        );
        state::save(&self.config.output, &books)?;

        let graph = MarketGraph::from_books(&books)?;

        info!("Calculating viable trade paths based on volume");
        let results = self
            .scanner
            .evaluate(&graph, self.config.starting_volume);

        info!("Determining arbitrage opportunities");
        let opportunities = Scanner::classify(&results, self.config.starting_volume);

        if opportunities.is_empty() {
            info!("No arbitrage opportunities detected");
        } else {
            info!("Arbitrage opportunities detected!");
            info!("{}", "=".repeat(40));
            for opportunity in opportunities {
                report(opportunity);
                info!("");
            }
        }
        Ok(())
    }
}
