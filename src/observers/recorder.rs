//! In-memory event log.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{CoinFlipObserver, GameObserver};
use crate::cards::Card;
use crate::combat::AttackEvent;
use crate::core::{Coord, GameState, PlayerId};

/// Something an observer was told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started(GameState),
    Moved { coord: Coord, card: Card, player: PlayerId },
    CoinFlip { event: AttackEvent, favored: PlayerId },
    Ended(GameState),
}

/// Records every notification into a shared log.
///
/// Clones share the same log, so keep one clone and register the other
/// with the engine.
///
/// ```
/// use tarock::observers::EventRecorder;
///
/// let recorder = EventRecorder::new();
/// let handle = recorder.clone();
/// assert!(handle.events().is_empty());
/// # drop(recorder);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    log: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.log.borrow().clone()
    }

    /// Just the coin flips, in order.
    #[must_use]
    pub fn coin_flips(&self) -> Vec<(AttackEvent, PlayerId)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                GameEvent::CoinFlip { event, favored } => Some((event.clone(), *favored)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: GameEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl CoinFlipObserver for EventRecorder {
    fn on_coin_flip(&mut self, event: &AttackEvent, favored: PlayerId) {
        self.push(GameEvent::CoinFlip {
            event: event.clone(),
            favored,
        });
    }
}

impl GameObserver for EventRecorder {
    fn on_game_start(&mut self, state: &GameState) {
        self.push(GameEvent::Started(state.clone()));
    }

    fn on_move(&mut self, coord: Coord, card: &Card, player: PlayerId) {
        self.push(GameEvent::Moved {
            coord,
            card: card.clone(),
            player,
        });
    }

    fn on_game_end(&mut self, state: &GameState) {
        self.push(GameEvent::Ended(state.clone()));
    }
}
