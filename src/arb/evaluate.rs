//! Depth- and fee-aware evaluation of one trade path.
//!
//! Evaluation simulates executing the path hop by hop against a single
//! immutable market snapshot. Each hop consumes the first depth entry with
//! enough volume for the fee-adjusted trade; prices compound sequentially.
//! A hop with no qualifying entry makes the whole path infeasible, with no
//! partial credit.

use super::cycle::TradePath;
use super::graph::MarketGraph;
use super::types::Currency;

/// Outcome of simulating a trade path against a market snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Every hop found sufficient depth; carries the hop-by-hop fill record
    Filled(PathFill),
    /// Some hop had no depth entry covering the fee-adjusted volume
    Infeasible,
}

impl Evaluation {
    /// The fill record, or `None` when the path was infeasible
    #[must_use]
    pub fn filled(self) -> Option<PathFill> {
        match self {
            Self::Filled(fill) => Some(fill),
            Self::Infeasible => None,
        }
    }
}

/// The audit record of one executed hop.
#[derive(Clone, Debug, PartialEq)]
pub struct HopFill {
    /// Volume held before this hop
    pub volume_in: f64,
    /// Currency converted from
    pub src: Currency,
    /// Currency converted to
    pub dst: Currency,
    /// Price of the depth entry that filled the hop
    pub price: f64,
    /// Fee scale `1 - fee` applied to the hop
    pub fee_scale: f64,
}

/// The complete simulation record of one feasible path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathFill {
    /// Per-hop fills in execution order
    pub hops: Vec<HopFill>,
    /// Volume held after the final hop
    pub final_volume: f64,
}

/// Simulates executing `path` starting with `starting_volume`.
///
/// Per hop the fee-adjusted threshold is `volume * (1 - fee)`; the depth list
/// is scanned in stored order and the first entry whose volume covers the
/// threshold fills the hop. The stored order is the execution priority, so no
/// re-sorting or best-price selection happens here. The new volume is
/// `volume * price * (1 - fee)`.
///
/// A hop whose conversion is missing from the graph evaluates as infeasible;
/// this is how a path goes stale when its pair disappears mid-session
/// (topology is never re-enumerated).
#[must_use]
pub fn evaluate(graph: &MarketGraph, path: &TradePath, starting_volume: f64) -> Evaluation {
    let mut volume = starting_volume;
    let mut hops = Vec::with_capacity(path.hop_count());

    for (src, dst) in path.hops() {
        let Some(edge) = graph.edge(src, dst) else {
            return Evaluation::Infeasible;
        };
        let fee_scale = 1.0 - edge.fee;
        let threshold = volume * fee_scale;

        let Some(entry) = edge.depth.iter().find(|entry| entry.volume >= threshold) else {
            return Evaluation::Infeasible;
        };

        hops.push(HopFill {
            volume_in: volume,
            src: src.clone(),
            dst: dst.clone(),
            price: entry.price,
            fee_scale,
        });
        volume *= entry.price * fee_scale;
    }

    Evaluation::Filled(PathFill {
        hops,
        final_volume: volume,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arb::test_helpers::*;

    #[test]
    fn test_profitable_round_trip() {
        // usd -> btc fills from the inverted asks at (0.01, 100000);
        // btc -> usd fills from the bids at (105, 2).
        let graph = graph(vec![book(
            "btc",
            "usd",
            0.002,
            &[(100.0, 1000.0)],
            &[(105.0, 2.0)],
        )]);
        let path = path(&["usd", "btc", "usd"]);

        let fill = evaluate(&graph, &path, 100.0).filled().unwrap();
        assert_eq!(fill.hops.len(), 2);
        assert_eq!(fill.hops[0].volume_in, 100.0);
        assert_eq!(fill.hops[0].price, 0.01);
        assert_eq!(fill.hops[0].fee_scale, 0.998);
        assert_eq!(fill.hops[1].volume_in, 100.0 * 0.01 * 0.998);
        assert_eq!(fill.hops[1].price, 105.0);

        let expected = 100.0 * 0.01 * 0.998 * 105.0 * 0.998;
        assert_eq!(fill.final_volume, expected);
        assert!(fill.final_volume > 100.0);
    }

    #[test]
    fn test_insufficient_depth_is_infeasible() {
        // Every btc -> usd level is below the fee-adjusted threshold.
        let graph = graph(vec![book(
            "btc",
            "usd",
            0.002,
            &[(100.0, 1000.0)],
            &[(105.0, 0.5), (104.0, 0.9)],
        )]);
        let path = path(&["usd", "btc", "usd"]);

        assert_eq!(evaluate(&graph, &path, 100.0), Evaluation::Infeasible);
    }

    #[test]
    fn test_stops_at_failing_hop() {
        let graph = graph(vec![
            book("b", "a", 0.0, &[(1.0, 0.0)], &[(1.0, 0.0)]),
            book("b", "c", 0.0, &[(1.0, 1000.0)], &[(1.0, 1000.0)]),
            book("c", "a", 0.0, &[(1.0, 1000.0)], &[(1.0, 1000.0)]),
        ]);
        // First hop a -> b has no volume at all; later hops would qualify.
        let path = path(&["a", "b", "c", "a"]);
        assert_eq!(evaluate(&graph, &path, 1.0), Evaluation::Infeasible);
    }

    #[test]
    fn test_first_qualifying_entry_wins_over_better_price() {
        // b -> a bids list (2, 100) before the better-priced (3, 100); the
        // stored order is the execution priority and must be honored.
        let graph = graph(vec![book(
            "b",
            "a",
            0.0,
            &[(1.0, 1000.0)],
            &[(2.0, 100.0), (3.0, 100.0)],
        )]);
        let trade = TradePath::new(vec![cur("b"), cur("a"), cur("b")]).unwrap();
        let fill = evaluate(&graph, &trade, 10.0).filled().unwrap();
        assert_eq!(fill.hops[0].price, 2.0);
    }

    #[test]
    fn test_skips_shallow_entry_for_deeper_one() {
        // The first level is too shallow for the trade size, the second fills.
        let graph = graph(vec![book(
            "b",
            "a",
            0.0,
            &[(1.0, 1000.0)],
            &[(2.0, 5.0), (1.5, 100.0)],
        )]);
        let trade = TradePath::new(vec![cur("b"), cur("a"), cur("b")]).unwrap();

        let fill = evaluate(&graph, &trade, 10.0).filled().unwrap();
        assert_eq!(fill.hops[0].price, 1.5);
    }

    #[test]
    fn test_missing_edge_is_infeasible() {
        let graph = graph(vec![unit_book("a", "b"), unit_book("b", "c")]);
        // A path referencing a conversion the graph no longer has.
        let stale = TradePath::new(vec![cur("a"), cur("c"), cur("a")]).unwrap();
        assert_eq!(evaluate(&graph, &stale, 1.0), Evaluation::Infeasible);
    }

    #[test]
    fn test_deterministic() {
        let graph = graph(vec![book(
            "btc",
            "usd",
            0.002,
            &[(100.0, 1000.0)],
            &[(105.0, 2.0)],
        )]);
        let path = path(&["usd", "btc", "usd"]);

        let first = evaluate(&graph, &path, 100.0);
        let second = evaluate(&graph, &path, 100.0);
        assert_eq!(first, second);
    }
}
