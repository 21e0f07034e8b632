//! Attack events.
//!
//! Placing a card produces one `AttackEvent` per adjacent opposing card.
//! Events are transient: the engine builds them from the board as it was
//! right after the card landed, resolves them in direction order, and
//! drops them.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::core::{Coord, Direction, PlayerId, Result};

/// One directional combat interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// The card just placed.
    pub attacker: Card,

    /// The opposing card next to it.
    pub defender: Card,

    pub attacker_coord: Coord,

    pub defender_coord: Coord,

    /// The player who placed the attacker.
    pub initiating_player: PlayerId,
}

impl AttackEvent {
    #[must_use]
    pub fn new(
        attacker: Card,
        defender: Card,
        attacker_coord: Coord,
        defender_coord: Coord,
        initiating_player: PlayerId,
    ) -> Self {
        Self {
            attacker,
            defender,
            attacker_coord,
            defender_coord,
            initiating_player,
        }
    }

    /// Direction from the attacker towards the defender.
    pub fn attack_direction(&self) -> Result<Direction> {
        Board::direction_between(self.attacker_coord, self.defender_coord)
    }

    /// Direction from the defender towards the attacker.
    pub fn defense_direction(&self) -> Result<Direction> {
        Board::direction_between(self.defender_coord, self.attacker_coord)
    }
}

impl std::fmt::Display for AttackEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} attacks {} {}",
            self.attacker.name(),
            self.attacker_coord,
            self.defender.name(),
            self.defender_coord
        )
    }
}
