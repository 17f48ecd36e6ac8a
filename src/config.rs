//! Runtime configuration for a scanning session.
//!
//! All settings come in through the command line (see `main.rs`); nothing is
//! read from process-wide mutable state.

use std::path::PathBuf;
use std::time::Duration;

/// Resolved configuration shared by the startup wiring and the refresh loop.
#[derive(Clone, Debug)]
pub struct Config {
    /// Snapshot to resume from; `None` downloads fresh market data
    pub input: Option<PathBuf>,
    /// Snapshot file written every refresh tick
    pub output: PathBuf,
    /// Volume each trade path starts with
    pub starting_volume: f64,
    /// Time between market refreshes
    pub interval: Duration,
    /// File receiving DEBUG-level logs
    pub log_file: PathBuf,
    /// Exchange API base URL
    pub api_url: String,
    /// Attempts per API request before giving up
    pub max_attempts: u32,
}
