//! Player registry with case-insensitive, insertion-ordered lookup
//!
//! Names are stored in canonical lowercased form; the registration order
//! is preserved for listing and survives removals.

use crate::error::LedgerError;
use crate::types::{Player, PlayerStats};
use crate::utils::canonical_name;
use tracing::debug;

/// Registry of all players known to a ledger
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Register a new player at the given starting rating
    pub fn add(&mut self, name: &str, initial_rating: i32) -> crate::error::Result<()> {
        let canonical = canonical_name(name);

        if self.position_of(&canonical).is_some() {
            return Err(LedgerError::PlayerAlreadyExists { name: canonical }.into());
        }

        debug!(player = %canonical, initial_rating, "player registered");
        self.players.push(Player::new(canonical, initial_rating));

        Ok(())
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> crate::error::Result<&Player> {
        let canonical = canonical_name(name);

        self.position_of(&canonical)
            .map(|index| &self.players[index])
            .ok_or_else(|| LedgerError::PlayerNotFound { name: canonical }.into())
    }

    /// Case-insensitive mutable lookup
    pub fn get_mut(&mut self, name: &str) -> crate::error::Result<&mut Player> {
        let canonical = canonical_name(name);

        match self.position_of(&canonical) {
            Some(index) => Ok(&mut self.players[index]),
            None => Err(LedgerError::PlayerNotFound { name: canonical }.into()),
        }
    }

    /// Remove a player, preserving the relative order of the rest
    ///
    /// Past contest history is not affected.
    pub fn remove(&mut self, name: &str) -> crate::error::Result<()> {
        let canonical = canonical_name(name);

        match self.position_of(&canonical) {
            Some(index) => {
                self.players.remove(index);
                debug!(player = %canonical, "player removed");
                Ok(())
            }
            None => Err(LedgerError::PlayerNotFound { name: canonical }.into()),
        }
    }

    /// Reset every player to the starting rating with fresh stats
    pub fn reset_all(&mut self, initial_rating: i32) {
        for player in &mut self.players {
            player.rating = initial_rating;
            player.last_delta = 0;
            player.stats = PlayerStats::new(initial_rating);
        }
    }

    /// Iterate players in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn position_of(&self, canonical: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == canonical)
    }
}
