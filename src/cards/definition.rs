//! Card definitions - static catalog data.
//!
//! `CardDefinition` is the catalog entry for a named card: its attack and
//! defense values and the directions it overpowers. Games instantiate
//! `Card` values from definitions when dealing hands.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, DirectionSet};

/// Catalog entry for a named card.
///
/// ## Example
///
/// ```
/// use tarock::{CardDefinition, Direction};
///
/// let kaktos = CardDefinition::new("Kaktos", 5, 4).overpowers(Direction::Up);
///
/// assert_eq!(kaktos.attack, 5);
/// assert!(kaktos.overpower.contains(Direction::Up));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name; unique within a catalog.
    pub name: String,

    pub attack: u32,

    pub defense: u32,

    /// Directions this card overpowers.
    #[serde(default)]
    pub overpower: DirectionSet,
}

impl CardDefinition {
    /// Create a definition with no overpower directions.
    #[must_use]
    pub fn new(name: impl Into<String>, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            overpower: DirectionSet::empty(),
        }
    }

    /// Add an overpower direction (builder pattern).
    #[must_use]
    pub fn overpowers(mut self, direction: Direction) -> Self {
        self.overpower.insert(direction);
        self
    }
}
