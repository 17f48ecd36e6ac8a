//! HTTP client for the exchange's public market-data API.
//!
//! Two endpoints are used: `info`, which lists every tradable pair with its
//! fee, and `depth/<pair>`, which serves one pair's order book. Transient
//! transport failures are retried up to a configured bound with a fresh
//! connection between attempts; exhausting the bound is a hard error, never
//! an empty order book that would read as "no liquidity".

use std::collections::HashMap;
use std::time::Duration;

use eyre::{bail, Result, WrapErr};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::arb::types::{Currency, DepthEntry, PairBook};

/// Timeout applied to every API request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A tradable pair and its session-static fee fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct PairInfo {
    /// The pair's base currency
    pub base: Currency,
    /// The pair's quote currency
    pub quote: Currency,
    /// Fractional transaction fee in `[0, 1)`
    pub fee: f64,
}

impl PairInfo {
    /// The pair's API symbol, e.g. `btc_usd`
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}_{}", self.base, self.quote)
    }

    /// Recovers the pair list from a set of pair books, e.g. after resuming
    /// from a snapshot.
    #[must_use]
    pub fn from_books(books: &[PairBook]) -> Vec<Self> {
        books
            .iter()
            .map(|book| Self {
                base: book.base.clone(),
                quote: book.quote.clone(),
                fee: book.fee,
            })
            .collect()
    }
}

/// `info` endpoint payload: per-pair metadata keyed by symbol
#[derive(Debug, Deserialize)]
struct InfoResponse {
    /// Pair metadata keyed by API symbol
    pairs: HashMap<String, PairMeta>,
}

/// Metadata for one pair as served by the `info` endpoint
#[derive(Debug, Deserialize)]
struct PairMeta {
    /// Transaction fee as a percentage
    fee: f64,
}

/// One order book as served by the `depth` endpoint
#[derive(Debug, Deserialize)]
struct DepthBook {
    /// Ask levels as `[price, volume]` rows
    asks: Vec<(f64, f64)>,
    /// Bid levels as `[price, volume]` rows
    bids: Vec<(f64, f64)>,
}

/// Client for the exchange API with retry-and-reconnect semantics.
#[derive(Debug)]
pub struct ExchangeClient {
    /// The underlying HTTP client, rebuilt on reconnect
    http: Client,
    /// API base URL, e.g. `https://btc-e.com`
    base_url: String,
    /// Attempts per request before giving up, at least 1
    max_attempts: u32,
}

impl ExchangeClient {
    /// Creates a client for `base_url` making up to `max_attempts` attempts
    /// per request.
    ///
    /// # Errors
    /// * If the HTTP client cannot be built
    pub fn new(base_url: &str, max_attempts: u32) -> Result<Self> {
        Ok(Self {
            http: Self::connect()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_attempts: max_attempts.max(1),
        })
    }

    /// Builds a fresh HTTP connection
    fn connect() -> Result<Client> {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .wrap_err("failed to build HTTP client")
    }

    /// Downloads the tradable pair list and per-pair fee schedule. Fees are
    /// served as percentages and converted to fractions here.
    ///
    /// # Errors
    /// * If the request fails after all attempts
    /// * If a pair symbol is not of the `base_quote` form
    pub async fn fetch_pairs(&mut self) -> Result<Vec<PairInfo>> {
        let info: InfoResponse = self.get_with_retry("info").await?;

        let mut pairs = Vec::with_capacity(info.pairs.len());
        for (symbol, meta) in info.pairs {
            let Some((base, quote)) = symbol.split_once('_') else {
                bail!("malformed pair symbol {symbol}");
            };
            pairs.push(PairInfo {
                base: Currency::from(base),
                quote: Currency::from(quote),
                fee: meta.fee * 0.01,
            });
        }

        // Deterministic fetch and reporting order.
        pairs.sort_by_key(PairInfo::symbol);
        Ok(pairs)
    }

    /// Downloads the order book of every pair, sequentially, and joins each
    /// with its fee fraction.
    ///
    /// # Errors
    /// * If any depth request fails after all attempts
    /// * If a response does not contain the requested pair
    pub async fn fetch_books(&mut self, pairs: &[PairInfo]) -> Result<Vec<PairBook>> {
        let mut books = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let symbol = pair.symbol();
            debug!("Downloading order depth for {symbol}");
            let mut response: HashMap<String, DepthBook> =
                self.get_with_retry(&format!("depth/{symbol}")).await?;
            let Some(book) = response.remove(&symbol) else {
                bail!("depth response is missing pair {symbol}");
            };

            let levels = |side: Vec<(f64, f64)>| {
                side.into_iter()
                    .map(|(price, volume)| DepthEntry { price, volume })
                    .collect()
            };
            books.push(PairBook {
                base: pair.base.clone(),
                quote: pair.quote.clone(),
                fee: pair.fee,
                asks: levels(book.asks),
                bids: levels(book.bids),
            });
        }
        Ok(books)
    }

    /// GETs a JSON payload, reconnecting and retrying on failure.
    async fn get_with_retry<T: DeserializeOwned>(&mut self, endpoint: &str) -> Result<T> {
        let url = format!("{}/api/3/{endpoint}", self.base_url);
        let mut remaining = self.max_attempts;
        loop {
            remaining -= 1;
            match self.get(&url).await {
                Ok(payload) => return Ok(payload),
                Err(err) if remaining > 0 => {
                    debug!("Request to {url} failed ({err}). Reconnecting with {remaining} tries remaining.");
                    self.http = Self::connect()?;
                }
                Err(err) => {
                    return Err(err).wrap_err_with(|| {
                        format!("giving up on {url} after {} attempts", self.max_attempts)
                    });
                }
            }
        }
    }

    /// One GET attempt decoding the JSON body
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?)
    }
}
