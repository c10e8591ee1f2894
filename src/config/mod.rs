//! Configuration management for the rating ledger
//!
//! This module holds the tunable parameters of the rating system along
//! with validation and preset values.

pub mod rating;

// Re-export commonly used types
pub use rating::RatingConfig;
