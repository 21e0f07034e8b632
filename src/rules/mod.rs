//! Game rules: placement, the live engine and move simulation.
//!
//! `placement` holds the single routine that mutates a `GameState`; the
//! `GameEngine` runs it on the live game with observers attached, and the
//! `MoveSimulator` runs it on clones. A `MoveSource` supplies moves when
//! `GameEngine::run` drives a whole game.

pub mod engine;
pub mod placement;
pub mod simulator;
pub mod source;

pub use engine::{GameEngine, GameEngineBuilder, GameResult, Phase};
pub use placement::{apply_placement, attack_events, validate, Placement};
pub use simulator::MoveSimulator;
pub use source::MoveSource;
