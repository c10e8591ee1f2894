//! Rating ledger facade
//!
//! This module ties the player registry, the contest history, and the
//! rating calculator together and exposes the contest-processing
//! operations. All mutation goes through `&mut self`, so a ledger is a
//! single unit of state with no partially applied contests observable.

pub mod history;
pub mod registry;

use crate::config::RatingConfig;
use crate::error::LedgerError;
use crate::rating::{AllPairsEloCalculator, RatingCalculator, Standing};
use crate::types::{Contest, ContestResult, Player, PlayerStats, RatingDelta};
use crate::utils::{canonical_name, current_timestamp};
use chrono::{DateTime, Utc};
use tracing::info;

pub use history::ContestHistory;
pub use registry::PlayerRegistry;

/// Owner of all rating state: players, history, and the rating engine
pub struct RatingLedger {
    registry: PlayerRegistry,
    history: ContestHistory,
    calculator: Box<dyn RatingCalculator>,
}

impl RatingLedger {
    /// Create a ledger with the default pairwise Elo calculator
    pub fn new() -> Self {
        Self::with_calculator(Box::new(AllPairsEloCalculator::default()))
    }

    /// Create a ledger with a custom rating configuration
    pub fn with_config(config: RatingConfig) -> crate::error::Result<Self> {
        Ok(Self::with_calculator(Box::new(AllPairsEloCalculator::new(
            config,
        )?)))
    }

    /// Create a ledger with a custom rating calculator
    pub fn with_calculator(calculator: Box<dyn RatingCalculator>) -> Self {
        Self {
            registry: PlayerRegistry::new(),
            history: ContestHistory::new(),
            calculator,
        }
    }

    /// Register a new player at the starting rating
    pub fn add_player(&mut self, name: &str) -> crate::error::Result<()> {
        self.registry.add(name, self.calculator.initial_rating())
    }

    /// Look up a player by name (case-insensitive)
    pub fn get_player(&self, name: &str) -> crate::error::Result<Player> {
        Ok(self.registry.get(name)?.clone())
    }

    /// Remove a player; past contests remain in the history
    pub fn remove_player(&mut self, name: &str) -> crate::error::Result<()> {
        self.registry.remove(name)
    }

    /// Reset every player to the starting rating and zeroed stats
    ///
    /// The contest history is untouched.
    pub fn reset_players(&mut self) {
        self.registry.reset_all(self.calculator.initial_rating());
    }

    /// Record a contest timestamped with the current time
    pub fn record_contest(
        &mut self,
        results: Vec<ContestResult>,
    ) -> crate::error::Result<Vec<RatingDelta>> {
        self.record_contest_at(results, current_timestamp())
    }

    /// Record a contest with a caller-supplied timestamp
    ///
    /// Either the whole contest applies (ratings, stats, history) or the
    /// ledger is left exactly as it was.
    pub fn record_contest_at(
        &mut self,
        results: Vec<ContestResult>,
        recorded_at: DateTime<Utc>,
    ) -> crate::error::Result<Vec<RatingDelta>> {
        if self.registry.is_empty() {
            return Err(LedgerError::NoPlayers.into());
        }

        if results.len() < 2 {
            return Err(LedgerError::DegenerateContest {
                participants: results.len(),
            }
            .into());
        }

        // Resolve every submitted result against the registry into a
        // pre-contest snapshot. Nothing is mutated until the whole
        // submission has validated and every delta is known.
        let mut standings = Vec::with_capacity(results.len());
        for result in &results {
            if canonical_name(&result.player).is_empty() {
                return Err(LedgerError::MalformedContest {
                    reason: "blank player reference in results".to_string(),
                }
                .into());
            }

            let player = self.registry.get(&result.player)?;
            standings.push(Standing::new(
                player.name.clone(),
                player.rating,
                result.position,
            ));
        }

        let deltas = self.calculator.calculate_deltas(&standings)?;

        // Apply ratings and fold stats in one pass over the snapshot.
        let mut applied = Vec::with_capacity(standings.len());
        for (standing, delta) in standings.iter().zip(&deltas) {
            let player = self.registry.get_mut(&standing.player)?;
            player.apply_contest(*delta, standing.position);

            applied.push(RatingDelta {
                player: player.name.clone(),
                old_rating: standing.rating,
                new_rating: player.rating,
                delta: *delta,
                position: standing.position,
            });
        }

        // History stores the resolved, canonical finishing order.
        let stored: Vec<ContestResult> = standings
            .iter()
            .map(|s| ContestResult::new(s.player.clone(), s.position))
            .collect();
        let contest_id = self.history.record(stored, recorded_at);

        info!(
            contest = %contest_id,
            participants = applied.len(),
            "recorded contest"
        );

        Ok(applied)
    }

    /// All players in registration order
    pub fn list_players(&self) -> Vec<Player> {
        self.registry.iter().cloned().collect()
    }

    /// All contests in recording order
    pub fn list_contests(&self) -> &[Contest] {
        self.history.all()
    }

    /// A player's running statistics
    pub fn player_stats(&self, name: &str) -> crate::error::Result<PlayerStats> {
        Ok(self.registry.get(name)?.stats.clone())
    }

    /// A player's current rating
    pub fn player_rating(&self, name: &str) -> crate::error::Result<i32> {
        Ok(self.registry.get(name)?.rating)
    }

    pub fn player_count(&self) -> usize {
        self.registry.len()
    }

    pub fn contest_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for RatingLedger {
    fn default() -> Self {
        Self::new()
    }
}
