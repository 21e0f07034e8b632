//! Move representation: a card placed on a coordinate.
//!
//! A `Move` is what a move source (human prompt or AI search) hands to the
//! engine. A `MoveRecord` is what the engine keeps in its history after the
//! move has been accepted and resolved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;
use super::player::PlayerId;
use crate::cards::Card;

/// A placement: put `card` from the acting player's hand on `coord`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub card: Card,
}

impl Move {
    #[must_use]
    pub fn new(coord: Coord, card: Card) -> Self {
        Self { coord, card }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.card, self.coord)
    }
}

/// An accepted move with its consequences, for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based turn number.
    pub turn: u32,

    pub player: PlayerId,

    pub coord: Coord,

    /// Name of the placed card.
    pub card: String,

    /// Cells whose ownership moved to `player` as a result of this move.
    pub captured: SmallVec<[Coord; 4]>,
}
