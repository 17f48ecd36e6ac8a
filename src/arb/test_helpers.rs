use super::cycle::TradePath;
use super::graph::MarketGraph;
use super::types::{Currency, DepthEntry, PairBook};

/// Currency from a symbol
pub fn cur(symbol: &str) -> Currency {
    Currency::from(symbol)
}

/// Depth entry from a `(price, volume)` tuple
pub fn entry(price: f64, volume: f64) -> DepthEntry {
    DepthEntry { price, volume }
}

/// Pair book from raw ask/bid tuples
pub fn book(
    base: &str,
    quote: &str,
    fee: f64,
    asks: &[(f64, f64)],
    bids: &[(f64, f64)],
) -> PairBook {
    let levels = |side: &[(f64, f64)]| side.iter().map(|&(price, volume)| entry(price, volume)).collect();
    PairBook {
        base: cur(base),
        quote: cur(quote),
        fee,
        asks: levels(asks),
        bids: levels(bids),
    }
}

/// Pair book with unit prices, effectively unlimited depth, and no fee.
/// Useful when only the topology matters.
pub fn unit_book(base: &str, quote: &str) -> PairBook {
    book(base, quote, 0.0, &[(1.0, 1e12)], &[(1.0, 1e12)])
}

/// Market graph from pair books
pub fn graph(books: Vec<PairBook>) -> MarketGraph {
    MarketGraph::from_books(&books).unwrap()
}

/// Trade path from symbols
pub fn path(symbols: &[&str]) -> TradePath {
    TradePath::new(symbols.iter().map(|symbol| cur(symbol)).collect()).unwrap()
}
