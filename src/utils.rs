//! Utility functions for the rating ledger

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique contest ID
pub fn generate_contest_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Normalize a player name to its canonical form for comparison
///
/// Names are case-insensitive and surrounding whitespace is ignored.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_contest_id();
        let id2 = generate_contest_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_canonical_name_lowercases() {
        assert_eq!(canonical_name("Fangio"), "fangio");
        assert_eq!(canonical_name("pLaYeR1"), "player1");
    }

    #[test]
    fn test_canonical_name_trims() {
        assert_eq!(canonical_name("  senna "), "senna");
        assert_eq!(canonical_name(""), "");
        assert_eq!(canonical_name("   "), "");
    }
}
