//! Core engine types: directions, coordinates, players, moves, state, RNG,
//! configuration and errors.

pub mod action;
pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::{GameConfig, MIN_HAND_SIZE};
pub use coord::{Coord, BOARD_SIZE};
pub use direction::{Direction, DirectionSet};
pub use error::{Result, TarockError};
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::GameState;
