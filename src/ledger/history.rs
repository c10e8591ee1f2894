//! Append-only contest history
//!
//! Contests are immutable once recorded; there is no update or delete.

use crate::types::{Contest, ContestId, ContestResult};
use crate::utils::generate_contest_id;
use chrono::{DateTime, Utc};

/// Chronological record of every contest processed by a ledger
#[derive(Debug, Default)]
pub struct ContestHistory {
    contests: Vec<Contest>,
}

impl ContestHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            contests: Vec::new(),
        }
    }

    /// Append a contest and return its assigned id
    pub fn record(&mut self, results: Vec<ContestResult>, recorded_at: DateTime<Utc>) -> ContestId {
        let id = generate_contest_id();
        self.contests.push(Contest {
            id,
            results,
            recorded_at,
        });
        id
    }

    /// Full history in recording order
    pub fn all(&self) -> &[Contest] {
        &self.contests
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::current_timestamp;

    #[test]
    fn test_record_appends_in_order() {
        let mut history = ContestHistory::new();
        assert!(history.is_empty());

        let first = history.record(
            vec![
                ContestResult::new("a", 1),
                ContestResult::new("b", 2),
            ],
            current_timestamp(),
        );
        let second = history.record(
            vec![
                ContestResult::new("b", 1),
                ContestResult::new("a", 2),
            ],
            current_timestamp(),
        );

        assert_ne!(first, second);
        assert_eq!(history.len(), 2);
        assert_eq!(history.all()[0].id, first);
        assert_eq!(history.all()[1].id, second);
        assert_eq!(history.all()[0].results[0].player, "a");
    }
}
