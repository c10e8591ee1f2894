//! Podium - Rating ledger for multi-participant contests
//!
//! This crate maintains integer skill ratings for players competing in
//! contests with any number of participants, using pairwise Elo updates,
//! and derives per-player running statistics from the recorded history.

pub mod config;
pub mod error;
pub mod ledger;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LedgerError, Result};
pub use types::*;

// Re-export key components
pub use config::RatingConfig;
pub use ledger::RatingLedger;
pub use rating::{AllPairsEloCalculator, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
