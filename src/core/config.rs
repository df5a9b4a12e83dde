//! Rule constants for a Greed game.
//!
//! The defaults are the classic table: five dice, 300 points to get on the
//! board, 3000 points to trigger the final round, at least two players.

use serde::{Deserialize, Serialize};

use super::error::{GreedError, Result};

/// Configuration for a single game.
///
/// ## Example
///
/// ```
/// use greed::core::GreedConfig;
///
/// let config = GreedConfig::default().with_target_score(1000);
/// assert_eq!(config.target_score, 1000);
/// assert_eq!(config.dice_count, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedConfig {
    /// Dice in a full roll, and the count restored by hot dice.
    pub dice_count: usize,

    /// Minimum pending score a player needs to bank for the first time.
    pub opening_threshold: u32,

    /// Banked score that starts the final round.
    pub target_score: u32,

    /// Players required before `start()` succeeds.
    pub min_players: usize,
}

impl Default for GreedConfig {
    fn default() -> Self {
        Self {
            dice_count: 5,
            opening_threshold: 300,
            target_score: 3000,
            min_players: 2,
        }
    }
}

impl GreedConfig {
    #[must_use]
    pub fn with_dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    #[must_use]
    pub fn with_opening_threshold(mut self, threshold: u32) -> Self {
        self.opening_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        self.min_players = count;
        self
    }

    /// Reject configurations the state machine cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count == 0 {
            return Err(GreedError::InvalidConfig("dice_count must be at least 1".into()));
        }
        if self.min_players == 0 {
            return Err(GreedError::InvalidConfig("min_players must be at least 1".into()));
        }
        if self.target_score == 0 {
            return Err(GreedError::InvalidConfig("target_score must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GreedConfig::default();
        assert_eq!(config.dice_count, 5);
        assert_eq!(config.opening_threshold, 300);
        assert_eq!(config.target_score, 3000);
        assert_eq!(config.min_players, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = GreedConfig::default()
            .with_dice_count(6)
            .with_opening_threshold(500)
            .with_target_score(10_000)
            .with_min_players(3);

        assert_eq!(config.dice_count, 6);
        assert_eq!(config.opening_threshold, 500);
        assert_eq!(config.target_score, 10_000);
        assert_eq!(config.min_players, 3);
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        assert!(matches!(
            GreedConfig::default().with_dice_count(0).validate(),
            Err(GreedError::InvalidConfig(_))
        ));
        assert!(matches!(
            GreedConfig::default().with_min_players(0).validate(),
            Err(GreedError::InvalidConfig(_))
        ));
        assert!(matches!(
            GreedConfig::default().with_target_score(0).validate(),
            Err(GreedError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GreedConfig::default().with_target_score(5000);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GreedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
