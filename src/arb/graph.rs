//! The directed market graph over currencies.
//!
//! Nodes are currencies; a directed edge `src -> dst` exists whenever some
//! pair's order book allows converting `src` into `dst`. Each pair contributes
//! both directions: the bids fill base-to-quote conversions as listed, and the
//! asks fill quote-to-base conversions with each `(price, volume)` entry mapped
//! to `(1/price, price*volume)`.
//!
//! The graph is an immutable per-tick snapshot. Depth is never mutated in
//! place; a fresh graph is built from each new set of pair books.

use std::collections::BTreeMap;

use eyre::{bail, Result};

use super::types::{Currency, DepthEntry, PairBook};

/// One directed conversion edge: the pair fee and the depth available for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Fractional fee in `[0, 1)` charged on this conversion
    pub fee: f64,
    /// Liquidity levels in execution-priority order
    pub depth: Vec<DepthEntry>,
}

/// Directed graph of all currently tradable conversions.
#[derive(Clone, Debug, Default)]
pub struct MarketGraph {
    /// Adjacency map: source currency to its outgoing edges keyed by destination
    edges: BTreeMap<Currency, BTreeMap<Currency, Edge>>,
}

impl MarketGraph {
    /// Builds the graph from raw pair books, populating both conversion
    /// directions of every pair.
    ///
    /// # Errors
    /// * If a pair's base and quote currency are the same
    /// * If a pair's fee is outside `[0, 1)`
    /// * If the same ordered pair appears twice
    pub fn from_books(books: &[PairBook]) -> Result<Self> {
        let mut graph = Self::default();
        for book in books {
            if book.base == book.quote {
                bail!("pair {}_{} is a self-loop", book.base, book.quote);
            }
            if !(0.0..1.0).contains(&book.fee) {
                bail!(
                    "pair {}_{} has fee {} outside [0, 1)",
                    book.base,
                    book.quote,
                    book.fee
                );
            }

            // Bids fill base -> quote as listed.
            let forward = book.bids.clone();

            // Asks fill quote -> base at the inverted price; the volume is
            // restated in quote-currency terms. Zero-priced levels cannot be
            // inverted and are dropped.
            let reverse = book
                .asks
                .iter()
                .filter(|entry| entry.price > 0.0)
                .map(|entry| DepthEntry {
                    price: 1.0 / entry.price,
                    volume: entry.price * entry.volume,
                })
                .collect();

            graph.insert(&book.base, &book.quote, book.fee, forward)?;
            graph.insert(&book.quote, &book.base, book.fee, reverse)?;
        }
        Ok(graph)
    }

    /// Inserts one directed edge, rejecting duplicates.
    fn insert(
        &mut self,
        src: &Currency,
        dst: &Currency,
        fee: f64,
        depth: Vec<DepthEntry>,
    ) -> Result<()> {
        let previous = self
            .edges
            .entry(src.clone())
            .or_default()
            .insert(dst.clone(), Edge { fee, depth });
        if previous.is_some() {
            bail!("duplicate pair {src}_{dst}");
        }
        Ok(())
    }

    /// All currencies that appear as the source of at least one conversion.
    /// Every pair populates both directions, so this is the full node set.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.edges.keys()
    }

    /// The currencies directly reachable from `node`, in symbol order.
    /// Empty for a currency the graph does not know.
    pub fn neighbors(&self, node: &Currency) -> impl Iterator<Item = &Currency> {
        self.edges.get(node).into_iter().flat_map(BTreeMap::keys)
    }

    /// The conversion edge from `src` to `dst`, or `None` when that
    /// conversion is not tradable.
    #[must_use]
    pub fn edge(&self, src: &Currency, dst: &Currency) -> Option<&Edge> {
        self.edges.get(src)?.get(dst)
    }

    /// Number of currencies in the graph
    #[must_use]
    pub fn currency_count(&self) -> usize {
        self.edges.len()
    }
}
