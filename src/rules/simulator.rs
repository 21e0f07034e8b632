//! Hypothetical moves on a copy of the state.
//!
//! Simulation goes through the same placement routine as the live engine,
//! but on a clone: the input state is never touched and no observer hears
//! about anything. Coin flips are decided by the simulator's own
//! tie-breaker so look-ahead is reproducible.

use super::placement::apply_placement;
use crate::cards::Card;
use crate::combat::{AttackEvent, TieBreaker};
use crate::core::{Coord, GameRng, GameState, Move, PlayerId, Result};

/// Applies moves to independent copies of a `GameState`.
pub struct MoveSimulator {
    tie_breaker: Box<dyn TieBreaker>,
}

impl MoveSimulator {
    #[must_use]
    pub fn new(tie_breaker: impl TieBreaker + 'static) -> Self {
        Self {
            tie_breaker: Box::new(tie_breaker),
        }
    }

    /// A simulator whose coin flips come from a `GameRng` seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// The state after placing `card` on `coord`, or the error the live
    /// engine would have reported.
    pub fn simulate(&mut self, coord: Coord, card: &Card, state: &GameState) -> Result<GameState> {
        let mut next = state.clone();
        apply_placement(
            &mut next,
            coord,
            card,
            self.tie_breaker.as_mut(),
            &mut |_: &AttackEvent, _: PlayerId| {},
        )?;
        Ok(next)
    }

    pub fn simulate_move(&mut self, mv: &Move, state: &GameState) -> Result<GameState> {
        self.simulate(mv.coord, &mv.card, state)
    }

    /// Every legal move paired with its resulting state, in
    /// `GameState::legal_moves` order.
    pub fn simulate_all(&mut self, state: &GameState) -> Result<Vec<(Move, GameState)>> {
        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let next = self.simulate_move(&mv, state)?;
                Ok((mv, next))
            })
            .collect()
    }
}

impl std::fmt::Debug for MoveSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveSimulator").finish_non_exhaustive()
    }
}
