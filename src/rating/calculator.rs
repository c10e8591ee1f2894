//! Rating calculator trait and implementations
//!
//! This module defines the interface for rating calculations so the
//! ledger can be exercised against different rating systems.

use crate::types::PlayerName;
use serde::{Deserialize, Serialize};

/// One participant's pre-contest state, as seen by a calculator
///
/// Ratings are captured before any update from the current contest is
/// applied, so results do not depend on iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerName,
    /// Rating immediately before this contest
    pub rating: i32,
    /// Submitted finishing position, lower is better
    pub position: i32,
}

impl Standing {
    pub fn new(player: impl Into<PlayerName>, rating: i32, position: i32) -> Self {
        Self {
            player: player.into(),
            rating,
            position,
        }
    }
}

/// Trait for calculating rating changes after contests
pub trait RatingCalculator: Send + Sync {
    /// Calculate the signed rating delta for every standing
    ///
    /// # Arguments
    /// * `standings` - Pre-contest rating snapshot plus finishing position
    ///   for each participant, in submission order
    ///
    /// # Returns
    /// One delta per standing, in the same order. The caller applies them;
    /// implementations must not assume ratings change between pairs.
    fn calculate_deltas(&self, standings: &[Standing]) -> crate::error::Result<Vec<i32>>;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> i32;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}

/// Simple rating calculator for testing or fallback
///
/// Leaves every rating untouched while still exercising the full contest
/// pipeline.
#[derive(Debug, Clone)]
pub struct NoOpRatingCalculator {
    initial_rating: i32,
}

impl NoOpRatingCalculator {
    /// Create a new no-op rating calculator
    pub fn new(initial_rating: i32) -> Self {
        Self { initial_rating }
    }
}

impl Default for NoOpRatingCalculator {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl RatingCalculator for NoOpRatingCalculator {
    fn calculate_deltas(&self, standings: &[Standing]) -> crate::error::Result<Vec<i32>> {
        if standings.is_empty() {
            return Err(crate::error::LedgerError::MalformedContest {
                reason: "no standings provided for rating calculation".to_string(),
            }
            .into());
        }

        // No-op: every participant keeps their rating
        Ok(vec![0; standings.len()])
    }

    fn initial_rating(&self) -> i32 {
        self.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "no_op",
            "initial_rating": self.initial_rating,
        })
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        if let Some(rating) = config.get("initial_rating").and_then(|v| v.as_i64()) {
            self.initial_rating = rating as i32;
        }
        Ok(())
    }
}
