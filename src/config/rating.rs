//! Rating system configuration

use serde::{Deserialize, Serialize};

/// Tunable parameters for the pairwise Elo rating system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Rating assigned to newly registered players
    pub initial_rating: i32,
    /// Total rating swing distributed across one contest; the per-pair
    /// K factor is derived as `base_k / (participants - 1)`
    pub base_k: i32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1000,
            base_k: 32,
        }
    }
}

impl RatingConfig {
    /// Create conservative configuration (smaller rating swings)
    pub fn conservative() -> Self {
        Self {
            initial_rating: 1000,
            base_k: 16,
        }
    }

    /// Create aggressive configuration (larger rating swings)
    pub fn aggressive() -> Self {
        Self {
            initial_rating: 1000,
            base_k: 64,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.initial_rating <= 0 {
            return Err(crate::error::LedgerError::ConfigurationError {
                message: "Initial rating must be positive".to_string(),
            }
            .into());
        }

        if self.base_k <= 0 {
            return Err(crate::error::LedgerError::ConfigurationError {
                message: "Base K factor must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RatingConfig::default();
        assert_eq!(config.initial_rating, 1000);
        assert_eq!(config.base_k, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RatingConfig::default();
        assert!(config.validate().is_ok());

        config.base_k = 0;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.initial_rating = -100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_presets() {
        let conservative = RatingConfig::conservative();
        let aggressive = RatingConfig::aggressive();
        let default = RatingConfig::default();

        assert!(conservative.base_k < default.base_k);
        assert!(aggressive.base_k > default.base_k);

        assert!(conservative.validate().is_ok());
        assert!(aggressive.validate().is_ok());
    }
}
