//! Card values held in hands and on the board.
//!
//! A `Card` is immutable once built. Identity is by name: two cards with
//! the same name are the same card for hand-removal purposes, even if their
//! stats differ, and two differently named cards are distinct even with
//! identical stats.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::definition::CardDefinition;
use crate::core::{Direction, DirectionSet};

/// An immutable card.
///
/// ```
/// use tarock::{Card, DirectionSet};
///
/// let a = Card::new("Ghost", 6, 7, DirectionSet::empty());
/// let b = Card::new("Ghost", 1, 1, DirectionSet::all());
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    name: String,
    attack: u32,
    defense: u32,
    overpower: DirectionSet,
}

impl Card {
    #[must_use]
    pub fn new(name: impl Into<String>, attack: u32, defense: u32, overpower: DirectionSet) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            overpower,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attack(&self) -> u32 {
        self.attack
    }

    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    #[must_use]
    pub fn overpower(&self) -> DirectionSet {
        self.overpower
    }

    /// Check whether this card overpowers in `direction`.
    #[must_use]
    pub fn overpowers(&self, direction: Direction) -> bool {
        self.overpower.contains(direction)
    }
}

impl From<&CardDefinition> for Card {
    fn from(def: &CardDefinition) -> Self {
        Self::new(def.name.clone(), def.attack, def.defense, def.overpower)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.defense)?;
        if !self.overpower.is_empty() {
            write!(f, " {}", self.overpower)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_name() {
        let a = Card::new("Spiderbot", 3, 7, DirectionSet::empty());
        let same_name = Card::new("Spiderbot", 9, 9, DirectionSet::all());
        let same_stats = Card::new("Itica", 3, 7, DirectionSet::empty());

        assert_eq!(a, same_name);
        assert_ne!(a, same_stats);
    }

    #[test]
    fn test_from_definition() {
        let def = CardDefinition::new("Kaktos", 5, 4).overpowers(Direction::Up);
        let card = Card::from(&def);

        assert_eq!(card.name(), "Kaktos");
        assert_eq!(card.attack(), 5);
        assert_eq!(card.defense(), 4);
        assert!(card.overpowers(Direction::Up));
        assert!(!card.overpowers(Direction::Down));
    }

    #[test]
    fn test_display() {
        let plain = Card::new("Engineer", 4, 3, DirectionSet::empty());
        assert_eq!(plain.to_string(), "Engineer (4/3)");

        let arrowed = Card::new("Kaktos", 5, 4, DirectionSet::empty().with(Direction::Up));
        assert_eq!(arrowed.to_string(), "Kaktos (5/4) ↑");
    }
}
