//! Card system: definitions, card values, catalog and hand fairness.
//!
//! ## Key Types
//!
//! - `CardDefinition`: catalog entry (name, stats, overpower directions)
//! - `Card`: immutable card value held by a hand or a board cell
//! - `CardCatalog`: name lookup and random draws

pub mod card;
pub mod catalog;
pub mod definition;
pub mod fairness;

pub use card::Card;
pub use catalog::CardCatalog;
pub use definition::CardDefinition;
pub use fairness::{hand_values, hands_are_fair};
