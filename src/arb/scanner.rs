//! Loop discovery, per-tick scoring, and opportunity reporting.
//!
//! Discovery runs once per session against the initial topology. Scoring runs
//! every refresh tick against the latest market snapshot; infeasible paths
//! are dropped, and a path is an opportunity only when its final volume
//! strictly exceeds the starting volume. The comparison is exact; a
//! configurable epsilon to absorb floating-point noise would be a refinement,
//! not current behavior.

use std::collections::BTreeMap;

use log::{debug, info};

use super::cycle::{cycles_from, TradePath};
use super::evaluate::{evaluate, Evaluation, PathFill};
use super::graph::MarketGraph;
use super::types::Currency;

/// One feasible path together with its simulation record.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// The evaluated trade path
    pub path: TradePath,
    /// Its hop-by-hop fill record
    pub fill: PathFill,
}

/// Holds the session's candidate loops and re-scores them per tick.
#[derive(Clone, Debug)]
pub struct Scanner {
    /// Candidate loops keyed by their root currency
    paths: BTreeMap<Currency, Vec<TradePath>>,
}

impl Scanner {
    /// Enumerates every simple loop through every currency of the initial
    /// graph. Invoked once per session; the topology is assumed stable
    /// afterwards.
    #[must_use]
    pub fn discover(graph: &MarketGraph) -> Self {
        let paths = graph
            .currencies()
            .map(|root| (root.clone(), cycles_from(graph, root)))
            .collect();
        Self { paths }
    }

    /// Total number of candidate loops
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    /// All candidate loops, grouped by root currency
    pub fn paths(&self) -> impl Iterator<Item = &TradePath> {
        self.paths.values().flatten()
    }

    /// Scores every candidate loop against `graph`. Infeasible paths are
    /// excluded from the result, not reported as zero yield.
    #[must_use]
    pub fn evaluate(&self, graph: &MarketGraph, starting_volume: f64) -> Vec<PathResult> {
        let mut results = Vec::new();
        for path in self.paths() {
            match evaluate(graph, path, starting_volume) {
                Evaluation::Filled(fill) => results.push(PathResult {
                    path: path.clone(),
                    fill,
                }),
                Evaluation::Infeasible => {
                    debug!("Skipping {path} due to volume constraints");
                }
            }
        }
        results
    }

    /// Keeps the results whose final volume strictly exceeds the starting
    /// volume: the arbitrage opportunities.
    #[must_use]
    pub fn classify(results: &[PathResult], starting_volume: f64) -> Vec<&PathResult> {
        results
            .iter()
            .filter(|result| result.fill.final_volume > starting_volume)
            .collect()
    }
}

/// Logs one opportunity hop by hop: volume in, conversion, price, and fee
/// scale per hop, then the final volume. Enough to audit the yield.
pub fn report(result: &PathResult) {
    info!("{}", result.path);
    for hop in &result.fill.hops {
        info!(
            "  {:>14.8} {} -> {} @ {:.8} * {:.4}",
            hop.volume_in, hop.src, hop.dst, hop.price, hop.fee_scale
        );
    }
    info!("  {:.8} {}", result.fill.final_volume, result.path.root());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arb::test_helpers::*;

    #[test]
    fn test_discover_counts_all_roots() {
        let graph = graph(vec![
            unit_book("a", "b"),
            unit_book("b", "c"),
            unit_book("a", "c"),
        ]);
        let scanner = Scanner::discover(&graph);

        // 4 loops per root (two pair round trips, two triangle orientations).
        assert_eq!(scanner.path_count(), 12);
        for trade in scanner.paths() {
            assert_eq!(trade.root(), trade.nodes().last().unwrap());
        }
    }

    #[test]
    fn test_evaluate_excludes_infeasible() {
        // Only the usd-rooted round trip finds enough depth at volume 100;
        // the btc-rooted rotation and both ltc loops come up short.
        let graph = graph(vec![
            book("btc", "usd", 0.002, &[(100.0, 1000.0)], &[(105.0, 2.0)]),
            book("ltc", "usd", 0.002, &[], &[]),
        ]);
        let scanner = Scanner::discover(&graph);
        assert_eq!(scanner.path_count(), 4);

        let results = scanner.evaluate(&graph, 100.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, path(&["usd", "btc", "usd"]));
    }

    #[test]
    fn test_classify_is_strict() {
        let graph = graph(vec![book(
            "btc",
            "usd",
            0.002,
            &[(100.0, 1000.0)],
            &[(105.0, 2.0)],
        )]);
        let scanner = Scanner::discover(&graph);
        let results = scanner.evaluate(&graph, 100.0);

        let opportunities = Scanner::classify(&results, 100.0);
        assert_eq!(opportunities.len(), 1);
        let winner = &opportunities[0];
        assert_eq!(winner.path, path(&["usd", "btc", "usd"]));
        assert_eq!(
            winner.fill.final_volume,
            100.0 * 0.01 * 0.998 * 105.0 * 0.998
        );

        // A result equal to the starting volume is not an opportunity.
        let break_even = winner.fill.final_volume;
        assert!(Scanner::classify(&results, break_even).is_empty());
    }

    #[test]
    fn test_shallow_depth_reports_no_opportunity() {
        // Same topology as the profitable case, but every btc -> usd level
        // is below the fee-adjusted threshold.
        let graph = graph(vec![book(
            "btc",
            "usd",
            0.002,
            &[(100.0, 1000.0)],
            &[(105.0, 0.5)],
        )]);
        let scanner = Scanner::discover(&graph);
        let results = scanner.evaluate(&graph, 100.0);

        for result in &results {
            assert_ne!(result.path, path(&["usd", "btc", "usd"]));
        }
        assert!(Scanner::classify(&results, 100.0).is_empty());
    }
}
