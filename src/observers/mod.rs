//! Observer hooks.
//!
//! The engine reports to two kinds of listeners, both invoked synchronously:
//!
//! - `CoinFlipObserver`: told which player a coin flip favoured, before the
//!   flip's outcome is applied to the board.
//! - `GameObserver`: told when the game starts, after each accepted move,
//!   and when the game ends. Purely read-only.
//!
//! Observers are registered on the `GameEngine`; any number of each kind
//! may be attached. `TracingObserver` logs everything through `tracing`,
//! and `EventRecorder` keeps a shared in-memory log.

pub mod logging;
pub mod recorder;

pub use logging::TracingObserver;
pub use recorder::{EventRecorder, GameEvent};

use crate::cards::Card;
use crate::combat::AttackEvent;
use crate::core::{Coord, GameState, PlayerId};

/// Listener for coin flips.
pub trait CoinFlipObserver {
    fn on_coin_flip(&mut self, event: &AttackEvent, favored: PlayerId);
}

/// Listener for game lifecycle events.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    fn on_game_start(&mut self, _state: &GameState) {}

    fn on_move(&mut self, _coord: Coord, _card: &Card, _player: PlayerId) {}

    fn on_game_end(&mut self, _state: &GameState) {}
}
