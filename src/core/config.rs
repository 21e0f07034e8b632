//! Game configuration.
//!
//! `GameConfig` describes how a game is set up: hand size, who moves first,
//! the seed for dealing and coin flips, and whether starting hands must be
//! balanced. It deserializes with defaults for any missing field, so a
//! config file only needs the values it changes.

use serde::{Deserialize, Serialize};

use super::coord::BOARD_SIZE;
use super::error::{Result, TarockError};
use super::player::PlayerId;

/// Smallest hand that can fill the board: the starting player places
/// ceil(9 / 2) cards.
pub const MIN_HAND_SIZE: usize = (BOARD_SIZE * BOARD_SIZE + 1) / 2;

/// Setup parameters for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Player who places first.
    pub starting_player: PlayerId,

    /// Seed for dealing and coin flips.
    pub seed: u64,

    /// Re-deal until the two hands are of similar value.
    pub fair_start: bool,

    /// Allowed value gap between hands, as a fraction of their total.
    pub fairness_tolerance: f64,

    /// Deals to try before giving up on a fair start.
    pub max_deal_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: MIN_HAND_SIZE,
            starting_player: PlayerId::FIRST,
            seed: 0,
            fair_start: false,
            fairness_tolerance: 0.1,
            max_deal_attempts: 10_000,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject configurations that cannot produce a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size < MIN_HAND_SIZE {
            return Err(TarockError::InvalidConfig(format!(
                "hand size {} is below the minimum of {MIN_HAND_SIZE}",
                self.hand_size
            )));
        }
        if !self.fairness_tolerance.is_finite() || self.fairness_tolerance < 0.0 {
            return Err(TarockError::InvalidConfig(format!(
                "fairness tolerance must be a non-negative number, got {}",
                self.fairness_tolerance
            )));
        }
        if self.max_deal_attempts == 0 {
            return Err(TarockError::InvalidConfig(
                "max deal attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.starting_player, PlayerId::FIRST);
        assert!(!config.fair_start);
        assert_eq!(config.max_deal_attempts, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let small = GameConfig {
            hand_size: 4,
            ..GameConfig::default()
        };
        assert!(matches!(small.validate(), Err(TarockError::InvalidConfig(_))));

        let negative = GameConfig {
            fairness_tolerance: -0.5,
            ..GameConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = GameConfig {
            fairness_tolerance: f64::NAN,
            ..GameConfig::default()
        };
        assert!(nan.validate().is_err());

        let no_attempts = GameConfig {
            max_deal_attempts: 0,
            ..GameConfig::default()
        };
        assert!(no_attempts.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "seed": 42, "fair_start": true, "starting_player": 1 }"#).unwrap();
        assert_eq!(config.seed, 42);
        assert!(config.fair_start);
        assert_eq!(config.starting_player, PlayerId::SECOND);
        assert_eq!(config.hand_size, 5);
        assert!((config.fairness_tolerance - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_starting_player_fails_to_parse() {
        let parsed: std::result::Result<GameConfig, _> =
            serde_json::from_str(r#"{ "starting_player": 2 }"#);
        assert!(parsed.is_err());
    }
}
