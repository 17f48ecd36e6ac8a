/*!
 * # Gyre - Exchange Arbitrage Loop Scanner
 *
 * Gyre is a Rust-based system for detecting multi-hop arbitrage opportunities
 * across the tradable currency pairs of a single exchange. It enumerates closed
 * trading loops over the pair graph and re-scores them against live order-book
 * depth, reporting every loop whose compounded yield exceeds the starting volume.
 *
 * ## Core Features
 *
 * - **Cycle Enumeration**: Finds every simple trading loop through each currency
 * - **Depth-Aware Evaluation**: Simulates sequential order-book consumption with
 *   fee compounding along each loop
 * - **Periodic Refresh**: Re-fetches market depth at a fixed interval and
 *   re-scores the loop set against the fresh snapshot
 * - **Session Resume**: Persists fee and depth data so a session can restart
 *   without re-downloading the fee schedule
 *
 * ## Module Structure
 *
 * - `arb`: Core cycle enumeration, path evaluation, and scanning logic
 * - `bot`: The refresh loop driving periodic re-scoring
 * - `config`: Runtime configuration resolved from the command line
 * - `exchange`: HTTP client for the exchange's public market-data API
 * - `state`: Market snapshot persistence for session resume
 * - `utils`: Utility functions and helpers
 */

/// Core cycle enumeration, path evaluation, and scanning logic
pub mod arb;
/// The refresh loop driving periodic re-scoring
pub mod bot;
/// Runtime configuration resolved from the command line
pub mod config;
/// HTTP client for the exchange's public market-data API
pub mod exchange;
/// Market snapshot persistence for session resume
pub mod state;
/// Utility functions and helpers
pub mod utils;
