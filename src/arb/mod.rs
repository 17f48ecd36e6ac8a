//! # Arbitrage Module
//!
//! This module contains the core arbitrage detection logic. It provides the
//! market graph over currency pairs, the enumeration of simple trading loops,
//! and the depth- and fee-aware evaluation that scores each loop against a
//! market snapshot.

/// Trade path construction and cycle enumeration
pub mod cycle;
/// Depth- and fee-aware path evaluation
pub mod evaluate;
/// The directed market graph over currencies
pub mod graph;
/// Loop discovery, per-tick scoring, and opportunity reporting
pub mod scanner;
/// Test helpers and utilities
#[cfg(test)]
mod test_helpers;
/// Common type definitions
pub mod types;
