//! Error type shared by the whole engine.
//!
//! Every variant is a precondition violation on the call that produced it.
//! The engine never retries and never applies a move partially: when an
//! operation returns an error, no state has changed.

use thiserror::Error;

use super::coord::Coord;
use super::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TarockError {
    #[error("coordinate ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: isize, col: isize },
    #[error("{neighbor} is not orthogonally adjacent to {origin}")]
    NotAdjacent { origin: Coord, neighbor: Coord },
    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),
    #[error("{player} holds no card named '{card}'")]
    CardNotInHand { player: PlayerId, card: String },
    #[error("the game is over")]
    GameOver,
    #[error("unknown card '{0}'")]
    UnknownCard(String),
    #[error("card '{0}' is already registered")]
    DuplicateCard(String),
    #[error("cannot draw from an empty card catalog")]
    EmptyCatalog,
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("no fair deal found after {attempts} attempts")]
    NoFairDeal { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, TarockError>;
