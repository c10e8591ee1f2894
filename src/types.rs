//! Common types used throughout the rating ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Unique identifier for players (canonical lowercased name)
pub type PlayerName = String;

/// Unique identifier for contests
pub type ContestId = Uuid;

/// Number of finishing positions retained in the recent-finish window
pub const RECENT_FINISH_CAPACITY: usize = 5;

/// Running statistics for a single player
///
/// Owned exclusively by one [`Player`] and mutated only as a side effect
/// of contest processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub contests_played: u64,
    pub contests_won: u64,
    /// Cumulative sum of finishing positions; divide by `contests_played`
    /// for the all-time average
    pub position_sum: i64,
    /// Last finishing positions, oldest first, bounded at
    /// [`RECENT_FINISH_CAPACITY`]
    pub recent_finishes: VecDeque<i32>,
    /// Highest rating ever held, seeded at the starting rating
    pub peak_rating: i32,
}

impl PlayerStats {
    /// Create zeroed stats for a new player
    pub fn new(initial_rating: i32) -> Self {
        Self {
            contests_played: 0,
            contests_won: 0,
            position_sum: 0,
            recent_finishes: VecDeque::with_capacity(RECENT_FINISH_CAPACITY),
            peak_rating: initial_rating,
        }
    }

    /// Fold one contest outcome into the running statistics
    ///
    /// `new_rating` is the player's rating after the contest's delta has
    /// been applied, so the peak tracks post-contest values.
    pub fn record_finish(&mut self, position: i32, new_rating: i32) {
        self.contests_played += 1;
        if position == 1 {
            self.contests_won += 1;
        }
        self.position_sum += i64::from(position);

        self.recent_finishes.push_back(position);
        while self.recent_finishes.len() > RECENT_FINISH_CAPACITY {
            self.recent_finishes.pop_front();
        }

        if new_rating > self.peak_rating {
            self.peak_rating = new_rating;
        }
    }

    /// All-time average finishing position, if any contests were played
    pub fn average_finish(&self) -> Option<f64> {
        if self.contests_played == 0 {
            return None;
        }
        Some(self.position_sum as f64 / self.contests_played as f64)
    }
}

/// A registered player with current rating and statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Canonical (lowercased) name, unique within a ledger
    pub name: PlayerName,
    /// Current rating
    pub rating: i32,
    /// Rating change from the most recent contest this player took part in
    pub last_delta: i32,
    pub stats: PlayerStats,
    pub registered_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player at the starting rating
    pub fn new(name: PlayerName, initial_rating: i32) -> Self {
        Self {
            name,
            rating: initial_rating,
            last_delta: 0,
            stats: PlayerStats::new(initial_rating),
            registered_at: crate::utils::current_timestamp(),
        }
    }

    /// Apply one contest's rating delta and fold the finish into the stats
    pub fn apply_contest(&mut self, delta: i32, position: i32) {
        self.rating += delta;
        self.last_delta = delta;
        self.stats.record_finish(position, self.rating);
    }
}

/// One participant's finishing position in a contest
///
/// Positions are caller-supplied; strictly lower values mean a better
/// finish. No contiguity or range is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestResult {
    pub player: PlayerName,
    pub position: i32,
}

impl ContestResult {
    pub fn new(player: impl Into<PlayerName>, position: i32) -> Self {
        Self {
            player: player.into(),
            position,
        }
    }
}

/// An immutable record of one recorded contest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    pub id: ContestId,
    /// Finishing order as submitted
    pub results: Vec<ContestResult>,
    pub recorded_at: DateTime<Utc>,
}

/// Rating change information for one participant in one contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDelta {
    pub player: PlayerName,
    pub old_rating: i32,
    pub new_rating: i32,
    /// Signed total rating change applied for this contest
    pub delta: i32,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zeroed() {
        let stats = PlayerStats::new(1000);
        assert_eq!(stats.contests_played, 0);
        assert_eq!(stats.contests_won, 0);
        assert_eq!(stats.position_sum, 0);
        assert!(stats.recent_finishes.is_empty());
        assert_eq!(stats.peak_rating, 1000);
        assert_eq!(stats.average_finish(), None);
    }

    #[test]
    fn test_record_finish_counts_wins_and_average() {
        let mut stats = PlayerStats::new(1000);
        stats.record_finish(1, 1015);
        stats.record_finish(3, 1010);

        assert_eq!(stats.contests_played, 2);
        assert_eq!(stats.contests_won, 1);
        assert_eq!(stats.position_sum, 4);
        assert_eq!(stats.average_finish(), Some(2.0));
    }

    #[test]
    fn test_recent_finish_window_evicts_oldest() {
        let mut stats = PlayerStats::new(1000);
        for position in 1..=6 {
            stats.record_finish(position, 1000);
        }

        let window: Vec<i32> = stats.recent_finishes.iter().copied().collect();
        assert_eq!(window, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_peak_rating_is_monotone() {
        let mut stats = PlayerStats::new(1000);
        stats.record_finish(1, 1015);
        assert_eq!(stats.peak_rating, 1015);

        stats.record_finish(4, 990);
        assert_eq!(stats.peak_rating, 1015);

        stats.record_finish(1, 1020);
        assert_eq!(stats.peak_rating, 1020);
    }

    #[test]
    fn test_apply_contest_updates_rating_and_stats() {
        let mut player = Player::new("ayrton".to_string(), 1000);
        player.apply_contest(15, 1);

        assert_eq!(player.rating, 1015);
        assert_eq!(player.last_delta, 15);
        assert_eq!(player.stats.contests_played, 1);
        assert_eq!(player.stats.peak_rating, 1015);

        player.apply_contest(-10, 4);
        assert_eq!(player.rating, 1005);
        assert_eq!(player.last_delta, -10);
        assert_eq!(player.stats.peak_rating, 1015);
    }
}
