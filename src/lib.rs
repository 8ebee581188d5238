//! expense-cli - Terminal expense tracker with local JSON persistence
//!
//! This library provides the core functionality for the expense-cli
//! application: an append-only collection of dated, categorized expense
//! records mirrored to a JSON file, with derived views (running total,
//! per-category aggregation) recomputed from the collection on demand.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: core data models (expense records, amounts, ids)
//! - `storage`: JSON file storage layer
//! - `services`: record-store operations and derived views
//! - `display`: terminal rendering of records and summaries
//! - `cli`: clap command definitions and handlers

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber
///
/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_cli=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
