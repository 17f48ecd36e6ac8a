//! Trade paths and the enumeration of simple cycles through the market graph.
//!
//! Enumeration runs once per session against the initial topology; the pair
//! set is assumed stable afterwards. Paths found from different roots may be
//! rotations of one another and are deliberately not deduplicated: evaluation
//! is traversal-order dependent, so each rotation is its own candidate.

use std::collections::HashSet;
use std::fmt::{self, Debug, Display};

use eyre::{bail, Result};
use itertools::Itertools;

use super::graph::MarketGraph;
use super::types::Currency;

/// A simple trading loop: a currency sequence whose first and last element
/// are the same root, with no other currency visited twice.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TradePath {
    /// Visited currencies, root first and last
    nodes: Vec<Currency>,
}

impl Display for TradePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" -> "))
    }
}

impl Debug for TradePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TradePath({self})")
    }
}

impl TradePath {
    /// Validates and wraps a currency sequence as a trade path.
    ///
    /// # Errors
    /// * If the sequence has fewer than 2 hops
    /// * If the first and last currency differ
    /// * If any currency other than the closing root repeats
    pub fn new(nodes: Vec<Currency>) -> Result<Self> {
        if nodes.len() < 3 {
            bail!("trade path must have at least 2 hops");
        }
        if nodes.first() != nodes.last() {
            bail!("trade path must start and end at the same currency");
        }
        let interior = &nodes[..nodes.len() - 1];
        let distinct: HashSet<&Currency> = interior.iter().collect();
        if distinct.len() != interior.len() {
            bail!("trade path revisits an intermediate currency");
        }
        Ok(Self { nodes })
    }

    /// The full currency sequence, root first and last
    #[must_use]
    pub fn nodes(&self) -> &[Currency] {
        &self.nodes
    }

    /// The currency the path starts and ends at
    #[must_use]
    pub fn root(&self) -> &Currency {
        &self.nodes[0]
    }

    /// Consecutive `(src, dst)` conversions along the path
    pub fn hops(&self) -> impl Iterator<Item = (&Currency, &Currency)> {
        self.nodes.windows(2).map(|hop| (&hop[0], &hop[1]))
    }

    /// Number of conversions in the path
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

/// Enumerates every simple cycle through `root`.
///
/// Depth-first search over the shared immutable graph. A visited set excludes
/// every node already on the partial path from being entered again, as either
/// source or destination; the root is kept out of that set so it stays legal
/// as the closing destination. Reaching the root with more than one node on
/// the path records a cycle and ends that branch. A node left with no
/// unvisited neighbors is a normal dead end.
#[must_use]
pub fn cycles_from(graph: &MarketGraph, root: &Currency) -> Vec<TradePath> {
    let mut found = Vec::new();
    let mut path = vec![root.clone()];
    let mut visited = HashSet::new();
    walk(graph, root, root, &mut path, &mut visited, &mut found);
    found
}

/// One recursion step of the cycle search: `current` is the node at the end
/// of `path`, `visited` holds every non-root node on `path`.
fn walk(
    graph: &MarketGraph,
    root: &Currency,
    current: &Currency,
    path: &mut Vec<Currency>,
    visited: &mut HashSet<Currency>,
    found: &mut Vec<TradePath>,
) {
    for next in graph.neighbors(current) {
        if next == root {
            if path.len() > 1 {
                let mut nodes = path.clone();
                nodes.push(root.clone());
                // Simple by construction: the visited set kept every interior
                // node distinct.
                found.push(TradePath { nodes });
            }
            continue;
        }
        if visited.contains(next) {
            continue;
        }
        path.push(next.clone());
        visited.insert(next.clone());
        walk(graph, root, next, path, visited, found);
        visited.remove(next);
        path.pop();
    }
}
