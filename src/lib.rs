//! # tarock
//!
//! Rules engine for Tarock, a two-player card placement game on a 3×3 board.
//!
//! Players alternate placing cards from their hands onto empty cells. A
//! freshly placed card attacks every orthogonally adjacent enemy card; a
//! successful attack flips the defender's cell to the attacker's side. When
//! all nine cells are filled the player owning more cells wins.
//!
//! ## Design Principles
//!
//! 1. **All-or-Nothing Moves**: A placement is validated before anything
//!    changes. Errors leave the game exactly as it was.
//!
//! 2. **Injected Randomness**: Coin flips go through a `TieBreaker`. A
//!    seeded `GameRng` makes whole games reproducible; a fixed or scripted
//!    tie-breaker makes them deterministic.
//!
//! 3. **Cheap Copies**: `GameState` clones share structure via `im`, so
//!    look-ahead with the `MoveSimulator` never touches the live game.
//!
//! ## Modules
//!
//! - `core`: Directions, coordinates, players, moves, state, RNG, config, errors
//! - `cards`: Card definitions, the catalog and starting-hand fairness
//! - `board`: The 3×3 grid and its cells
//! - `combat`: Attack events, resolution and tie-breaking
//! - `rules`: Placement, the live `GameEngine`, move sources and the `MoveSimulator`
//! - `observers`: Coin-flip and game lifecycle listeners
//! - `setup`: Dealing hands from a catalog and starting a game

pub mod core;
pub mod cards;
pub mod board;
pub mod combat;
pub mod rules;
pub mod observers;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    Coord, BOARD_SIZE,
    Direction, DirectionSet,
    PlayerId, PlayerPair, PLAYER_COUNT,
    GameRng,
    GameConfig, MIN_HAND_SIZE,
    Move, MoveRecord,
    GameState,
    Result, TarockError,
};

pub use crate::cards::{Card, CardCatalog, CardDefinition, hand_values, hands_are_fair};

pub use crate::board::{Board, Cell, Occupant};

pub use crate::combat::{
    AttackEvent, AttackOutcome, CombatResolver, Ruling,
    TieBreaker, FixedTieBreaker, FavorAttacker, ScriptedTieBreaker,
};

pub use crate::rules::{
    GameEngine, GameEngineBuilder, GameResult, MoveSimulator, MoveSource, Phase, Placement,
};

pub use crate::observers::{CoinFlipObserver, GameObserver};

pub use crate::setup::GameSetup;
