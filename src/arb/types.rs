use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A currency symbol, e.g. `btc` or `usd`.
///
/// Symbols are kept exactly as the exchange reports them; no case folding or
/// validation beyond non-emptiness is attempted here.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// The symbol as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(symbol: &str) -> Self {
        Self(symbol.to_owned())
    }
}

impl From<String> for Currency {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

/// One liquidity level of an order book: a price and the volume available at it.
///
/// Depth lists are kept in the order the exchange serves them, which is the
/// order they would be consumed in. They are never re-sorted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthEntry {
    /// Conversion price applied to the traded volume
    pub price: f64,
    /// Volume available at this price level
    pub volume: f64,
}

/// One tradable pair's raw market data, as fetched from the exchange or loaded
/// from a session snapshot.
///
/// A single order book serves both conversion directions: the bids side fills
/// base-to-quote conversions and the asks side (price-inverted) fills
/// quote-to-base conversions. That inversion happens when the market graph is
/// built, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairBook {
    /// The pair's base currency
    pub base: Currency,
    /// The pair's quote currency
    pub quote: Currency,
    /// Fractional transaction fee in `[0, 1)`, applied to both directions
    pub fee: f64,
    /// Ask side of the order book, best execution priority first
    pub asks: Vec<DepthEntry>,
    /// Bid side of the order book, best execution priority first
    pub bids: Vec<DepthEntry>,
}
