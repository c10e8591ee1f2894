//! Rating system for multi-participant contests
//!
//! This module provides the rating calculator interface and the pairwise
//! Elo implementation built on the skillratings crate.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::{NoOpRatingCalculator, RatingCalculator, Standing};
pub use elo::AllPairsEloCalculator;
