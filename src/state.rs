//! Market snapshot persistence.
//!
//! The snapshot is the full set of pair books (fees and both depth lists) as
//! JSON. It is written every refresh tick and can be loaded on startup to
//! resume a session without re-downloading the fee schedule. A snapshot that
//! fails to parse is fatal; scanning cannot proceed on a partial graph.

use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};

use crate::arb::types::PairBook;

/// Writes the pair books to `path` as pretty-printed JSON.
///
/// # Errors
/// * If serialization fails
/// * If the file cannot be written
pub fn save(path: &Path, books: &[PairBook]) -> Result<()> {
    let json = serde_json::to_string_pretty(books)
        .wrap_err("failed to serialize market snapshot")?;
    fs::write(path, json)
        .wrap_err_with(|| format!("failed to write market snapshot {}", path.display()))
}

/// Loads pair books from a snapshot written by [`save`].
///
/// # Errors
/// * If the file cannot be read
/// * If the content is not a valid snapshot
pub fn load(path: &Path) -> Result<Vec<PairBook>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read market snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("malformed market snapshot {}", path.display()))
}
