//! Move sources: whoever decides the next placement.
//!
//! A `MoveSource` is asked for a move whenever its player is next. Human
//! prompts, scripted replays and AI searches all sit behind this trait; the
//! engine only checks that what they return is legal.

use crate::core::{GameState, Move};

/// Supplies moves for one player.
pub trait MoveSource {
    /// Pick a placement for `state.next_player()`.
    fn choose_move(&mut self, state: &GameState) -> Move;
}

impl<F> MoveSource for F
where
    F: FnMut(&GameState) -> Move,
{
    fn choose_move(&mut self, state: &GameState) -> Move {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{Coord, DirectionSet, PlayerId, PlayerPair};

    #[test]
    fn test_closure_and_boxed_sources() {
        let card = Card::new("Engineer", 4, 3, DirectionSet::empty());
        let state = GameState::new(PlayerPair::new(vec![card.clone()], vec![]), PlayerId::FIRST);

        let mut calls = 0;
        let mut counting = |s: &GameState| {
            calls += 1;
            s.legal_moves().remove(0)
        };
        assert_eq!(counting.choose_move(&state), Move::new(Coord::new(0, 0), card.clone()));
        assert_eq!(calls, 1);

        let mut boxed: Box<dyn MoveSource> =
            Box::new(|s: &GameState| s.legal_moves().pop().unwrap());
        assert_eq!(boxed.choose_move(&state), Move::new(Coord::new(2, 2), card));
    }
}
