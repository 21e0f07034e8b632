//! Board cells.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// A card on the board together with the player who currently owns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub card: Card,
    pub owner: PlayerId,
}

/// A single board cell: empty, or holding a card and its owner.
///
/// Storing card and owner together means a cell can never have an owner
/// without a card, or a card without an owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell(Option<Occupant>);

impl Cell {
    /// An occupied cell.
    #[must_use]
    pub fn occupied(card: Card, owner: PlayerId) -> Self {
        Self(Some(Occupant { card, owner }))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.0.as_ref().map(|o| &o.card)
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.0.as_ref().map(|o| o.owner)
    }

    #[must_use]
    pub fn occupant(&self) -> Option<&Occupant> {
        self.0.as_ref()
    }

    /// Reassign ownership. Returns `false` (and does nothing) on an empty cell.
    pub(crate) fn set_owner(&mut self, owner: PlayerId) -> bool {
        match &mut self.0 {
            Some(occupant) => {
                occupant.owner = owner;
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(o) => write!(f, "{} [{}]", o.card, o.owner),
            None => f.write_str("Empty"),
        }
    }
}
