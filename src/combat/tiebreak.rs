//! Coin-flip decision policies.
//!
//! Ties in combat (mutual overpower, or attack equal to defense) are broken
//! by a coin flip. The engine never flips a coin itself: it asks the
//! injected `TieBreaker` which player the flip favours. Live games use a
//! seeded `GameRng`; tests and simulations can pin the outcome.

use std::collections::VecDeque;

use super::event::AttackEvent;
use crate::core::{GameRng, PlayerId};

/// Decides which player a tied attack favours.
pub trait TieBreaker {
    fn favored_player(&mut self, event: &AttackEvent) -> PlayerId;
}

/// Unbiased coin flip.
impl TieBreaker for GameRng {
    fn favored_player(&mut self, _event: &AttackEvent) -> PlayerId {
        if self.gen_bool(0.5) {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }
}

impl<T: TieBreaker + ?Sized> TieBreaker for Box<T> {
    fn favored_player(&mut self, event: &AttackEvent) -> PlayerId {
        (**self).favored_player(event)
    }
}

/// Every flip favours the same player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTieBreaker(pub PlayerId);

impl TieBreaker for FixedTieBreaker {
    fn favored_player(&mut self, _event: &AttackEvent) -> PlayerId {
        self.0
    }
}

/// Every flip favours whoever initiated the attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FavorAttacker;

impl TieBreaker for FavorAttacker {
    fn favored_player(&mut self, event: &AttackEvent) -> PlayerId {
        event.initiating_player
    }
}

/// Replays a predetermined sequence of flips, then repeats the last one.
///
/// An empty script favours `PlayerId::FIRST`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTieBreaker {
    script: VecDeque<PlayerId>,
    last: Option<PlayerId>,
    flips: usize,
}

impl ScriptedTieBreaker {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: None,
            flips: 0,
        }
    }

    /// Number of flips requested so far.
    #[must_use]
    pub fn flips(&self) -> usize {
        self.flips
    }
}

impl TieBreaker for ScriptedTieBreaker {
    fn favored_player(&mut self, _event: &AttackEvent) -> PlayerId {
        self.flips += 1;
        let next = self
            .script
            .pop_front()
            .or(self.last)
            .unwrap_or(PlayerId::FIRST);
        self.last = Some(next);
        next
    }
}
