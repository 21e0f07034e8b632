//! Combat: attack events, their resolution, and coin-flip policies.
//!
//! - `AttackEvent`: one attack produced by a placement
//! - `CombatResolver`: pure ruling plus tie-break decision
//! - `TieBreaker`: injected coin-flip policy

pub mod event;
pub mod resolver;
pub mod tiebreak;

pub use event::AttackEvent;
pub use resolver::{AttackOutcome, CombatResolver, Ruling};
pub use tiebreak::{FavorAttacker, FixedTieBreaker, ScriptedTieBreaker, TieBreaker};
