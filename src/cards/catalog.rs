//! Card catalog for definition lookup and random draws.
//!
//! The `CardCatalog` stores every card definition available to a game. The
//! engine only needs two capabilities from it: instantiate a `Card` by name
//! and draw a uniformly random card. Draws are with replacement, so a hand
//! may contain the same card more than once.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::definition::CardDefinition;
use crate::core::{GameRng, Result, TarockError};

/// Registry of card definitions.
///
/// Definitions keep their registration order so random draws are
/// reproducible for a given seed.
///
/// ## Example
///
/// ```
/// use tarock::{CardCatalog, CardDefinition, GameRng};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("Engineer", 4, 3)).unwrap();
///
/// let card = catalog.card("Engineer").unwrap();
/// assert_eq!(card.attack(), 4);
///
/// let mut rng = GameRng::new(1);
/// assert_eq!(catalog.draw(&mut rng).unwrap().name(), "Engineer");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    definitions: Vec<CardDefinition>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate names.
    pub fn from_definitions(definitions: impl IntoIterator<Item = CardDefinition>) -> Result<Self> {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    pub fn register(&mut self, def: CardDefinition) -> Result<()> {
        if self.by_name.contains_key(&def.name) {
            return Err(TarockError::DuplicateCard(def.name));
        }
        self.by_name.insert(def.name.clone(), self.definitions.len());
        self.definitions.push(def);
        Ok(())
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name).map(|&i| &self.definitions[i])
    }

    /// Instantiate a card by name.
    pub fn card(&self, name: &str) -> Result<Card> {
        self.get(name)
            .map(Card::from)
            .ok_or_else(|| TarockError::UnknownCard(name.to_string()))
    }

    /// Draw a uniformly random card.
    pub fn draw(&self, rng: &mut GameRng) -> Result<Card> {
        rng.choose(&self.definitions)
            .map(Card::from)
            .ok_or(TarockError::EmptyCatalog)
    }

    /// Draw `size` random cards.
    pub fn deal_hand(&self, rng: &mut GameRng, size: usize) -> Result<Vec<Card>> {
        (0..size).map(|_| self.draw(rng)).collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.definitions.iter()
    }
}
