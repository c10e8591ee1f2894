//! Pairwise Elo rating implementation for multi-participant contests
//!
//! This module provides the concrete rating calculator: one contest with N
//! participants is decomposed into all N*(N-1) ordered pairwise
//! comparisons, scored with the classic Elo expected-score curve from the
//! skillratings crate.

use crate::config::RatingConfig;
use crate::error::LedgerError;
use crate::rating::calculator::{RatingCalculator, Standing};
use skillratings::elo::{expected_score, EloRating};
use tracing::debug;

/// Pairwise ("all-pairs") Elo rating calculator
///
/// The per-pair K factor shrinks with contest size, `base_k / (N - 1)`,
/// so the total movement for one contest stays bounded similarly to a
/// two-player game.
#[derive(Debug)]
pub struct AllPairsEloCalculator {
    config: RatingConfig,
}

impl AllPairsEloCalculator {
    /// Create a new pairwise Elo calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Per-pair K factor for a contest with `participants` entrants
    ///
    /// Integer floor division, matching the bounded-swing derivation; a
    /// contest larger than `base_k + 1` participants floors to K = 0.
    fn pair_k(&self, participants: usize) -> i32 {
        self.config.base_k / (participants as i32 - 1)
    }
}

impl Default for AllPairsEloCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for AllPairsEloCalculator {
    fn calculate_deltas(&self, standings: &[Standing]) -> crate::error::Result<Vec<i32>> {
        // The K derivation divides by N - 1; fewer than two participants
        // is not a contest.
        if standings.len() < 2 {
            return Err(LedgerError::DegenerateContest {
                participants: standings.len(),
            }
            .into());
        }

        let k = self.pair_k(standings.len());
        let mut deltas = Vec::with_capacity(standings.len());

        for (index, standing) in standings.iter().enumerate() {
            let own = EloRating {
                rating: f64::from(standing.rating),
            };
            let mut pending = 0i32;

            for (opponent_index, opponent) in standings.iter().enumerate() {
                if index == opponent_index {
                    continue;
                }

                // Strictly-lower position wins the pair; an equal position
                // scores 0 for both sides.
                let actual = if standing.position < opponent.position {
                    1.0
                } else {
                    0.0
                };

                let (expected, _) = expected_score(
                    &own,
                    &EloRating {
                        rating: f64::from(opponent.rating),
                    },
                );

                // Rounded once per opponent, then summed as integers;
                // accumulated rounding asymmetry across the field is
                // accepted.
                pending += (f64::from(k) * (actual - expected)).round() as i32;
            }

            deltas.push(pending);
        }

        debug!(
            participants = standings.len(),
            k, "calculated pairwise rating deltas"
        );

        Ok(deltas)
    }

    fn initial_rating(&self) -> i32 {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: RatingConfig = serde_json::from_value(config).map_err(|e| {
            LedgerError::ConfigurationError {
                message: format!("Invalid rating configuration: {}", e),
            }
        })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}
