//! Game setup: dealing starting hands and building an engine.
//!
//! `GameSetup` turns a `GameConfig` and a `CardCatalog` into a running
//! `GameEngine`. Dealing and coin flips draw from separate streams derived
//! from the config seed, so the same seed always produces the same hands
//! and the same flips regardless of how many deals a fair start needed.
//!
//! ## Example
//!
//! ```
//! use tarock::{CardCatalog, CardDefinition, GameSetup, PlayerId};
//!
//! let catalog = CardCatalog::from_definitions([
//!     CardDefinition::new("Engineer", 4, 3),
//!     CardDefinition::new("Training Dummy", 1, 6),
//! ])
//! .unwrap();
//!
//! let engine = GameSetup::new()
//!     .seed(7)
//!     .starting_player(PlayerId::SECOND)
//!     .build(&catalog)
//!     .unwrap();
//!
//! assert_eq!(engine.state().hand(PlayerId::FIRST).len(), 5);
//! assert_eq!(engine.state().next_player(), PlayerId::SECOND);
//! ```

use crate::cards::{hands_are_fair, Card, CardCatalog};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerPair, Result, TarockError};
use crate::rules::{GameEngine, GameEngineBuilder};

/// Builder for a dealt game.
#[derive(Clone, Debug, Default)]
pub struct GameSetup {
    config: GameConfig,
}

impl GameSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.config.starting_player = player;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Require balanced hands, within `tolerance` of their combined value.
    pub fn fair_start(mut self, tolerance: f64) -> Self {
        self.config.fair_start = true;
        self.config.fairness_tolerance = tolerance;
        self
    }

    pub fn max_deal_attempts(mut self, attempts: u32) -> Self {
        self.config.max_deal_attempts = attempts;
        self
    }

    /// Deal both starting hands.
    ///
    /// Without a fair start the first deal is used. With one, hands are
    /// re-dealt until they pass the fairness check, failing with
    /// `NoFairDeal` once `max_deal_attempts` deals have been rejected.
    pub fn deal(&self, catalog: &CardCatalog) -> Result<PlayerPair<Vec<Card>>> {
        self.config.validate()?;

        let mut rng = GameRng::new(self.config.seed).for_context("deal");
        let attempts = if self.config.fair_start {
            self.config.max_deal_attempts
        } else {
            1
        };

        for attempt in 1..=attempts {
            let first = catalog.deal_hand(&mut rng, self.config.hand_size)?;
            let second = catalog.deal_hand(&mut rng, self.config.hand_size)?;
            let hands = PlayerPair::new(first, second);

            if !self.config.fair_start || hands_are_fair(&hands, self.config.fairness_tolerance) {
                tracing::debug!(attempt, seed = self.config.seed, "hands dealt");
                return Ok(hands);
            }
            tracing::trace!(attempt, "unfair deal, re-dealing");
        }

        tracing::warn!(attempts, tolerance = self.config.fairness_tolerance, "no fair deal found");
        Err(TarockError::NoFairDeal { attempts })
    }

    /// Deal and return an engine builder, so observers can be attached
    /// before the game starts.
    pub fn engine_builder(&self, catalog: &CardCatalog) -> Result<GameEngineBuilder> {
        let hands = self.deal(catalog)?;
        let coin_flips = GameRng::new(self.config.seed).for_context("coin-flip");

        Ok(GameEngine::builder(hands)
            .starting_player(self.config.starting_player)
            .tie_breaker(coin_flips))
    }

    /// Deal and start the game.
    pub fn build(self, catalog: &CardCatalog) -> Result<GameEngine> {
        self.engine_builder(catalog)?.build()
    }
}
