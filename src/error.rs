//! Error types for the rating ledger
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ledger scenarios
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Player already exists: {name}")]
    PlayerAlreadyExists { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("No players registered")]
    NoPlayers,

    #[error("Malformed contest: {reason}")]
    MalformedContest { reason: String },

    #[error("Degenerate contest: {participants} participant(s), at least 2 required")]
    DegenerateContest { participants: usize },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
