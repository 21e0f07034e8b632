//! The game engine: turn-by-turn driver of a live game.
//!
//! `GameEngine` owns the `GameState`, the injected `TieBreaker` and the
//! registered observers. Each call to `place_card` is all-or-nothing: it
//! either applies the whole placement (card, attacks, turn change, terminal
//! check) or returns an error and leaves the game untouched.
//!
//! ## State machine
//!
//! `AwaitingMove(p)` → `AwaitingMove(opponent)` while empty cells remain,
//! `AwaitingMove(p)` → `Ended` once the board is full. `Ended` is terminal.
//!
//! The builder refuses hands that cannot fill the board, so every
//! `AwaitingMove` state has at least one legal move.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::placement::{apply_placement, Placement};
use super::source::MoveSource;
use crate::cards::Card;
use crate::combat::{AttackEvent, TieBreaker};
use crate::core::{
    Coord, GameRng, GameState, Move, MoveRecord, PlayerId, PlayerPair, Result, TarockError,
    BOARD_SIZE, MIN_HAND_SIZE,
};
use crate::observers::{CoinFlipObserver, GameObserver};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player owning more cells.
    Winner(PlayerId),
    /// Both players own the same number of cells.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove(PlayerId),
    Ended,
}

/// A live game.
///
/// ## Example
///
/// ```
/// use tarock::{Card, Coord, DirectionSet, FixedTieBreaker, GameEngine, PlayerId, PlayerPair};
///
/// let hand = |prefix: &str| -> Vec<Card> {
///     (0..5)
///         .map(|i| Card::new(format!("{prefix}{i}"), 3, 3, DirectionSet::empty()))
///         .collect()
/// };
/// let hands = PlayerPair::new(hand("a"), hand("b"));
///
/// let mut engine = GameEngine::builder(hands)
///     .tie_breaker(FixedTieBreaker(PlayerId::FIRST))
///     .build()
///     .unwrap();
///
/// let card = engine.state().hand(PlayerId::FIRST)[0].clone();
/// engine.place_card(Coord::new(1, 1), &card).unwrap();
/// assert_eq!(engine.state().next_player(), PlayerId::SECOND);
/// ```
pub struct GameEngine {
    state: GameState,
    tie_breaker: Box<dyn TieBreaker>,
    coin_flip_observers: Vec<Box<dyn CoinFlipObserver>>,
    game_observers: Vec<Box<dyn GameObserver>>,
    history: Vector<MoveRecord>,
}

impl GameEngine {
    /// Start a game with no observers.
    pub fn new(
        hands: PlayerPair<Vec<Card>>,
        starting_player: PlayerId,
        tie_breaker: impl TieBreaker + 'static,
    ) -> Result<Self> {
        Self::builder(hands)
            .starting_player(starting_player)
            .tie_breaker(tie_breaker)
            .build()
    }

    /// Configure a game before starting it.
    #[must_use]
    pub fn builder(hands: PlayerPair<Vec<Card>>) -> GameEngineBuilder {
        GameEngineBuilder::new(hands)
    }

    // === Observers ===

    pub fn register_coin_flip_observer(&mut self, observer: impl CoinFlipObserver + 'static) {
        self.coin_flip_observers.push(Box::new(observer));
    }

    /// Register a game observer. Observers added after the game started do
    /// not receive `on_game_start`.
    pub fn register_game_observer(&mut self, observer: impl GameObserver + 'static) {
        self.game_observers.push(Box::new(observer));
    }

    // === Play ===

    /// Place `card` from the current player's hand on `coord`.
    ///
    /// Fails with `GameOver`, `OutOfBounds`, `CellOccupied` or
    /// `CardNotInHand`; on failure nothing changes and no observer is told.
    pub fn place_card(&mut self, coord: Coord, card: &Card) -> Result<Placement> {
        let coin_flip_observers = &mut self.coin_flip_observers;
        let mut notify = |event: &AttackEvent, favored: PlayerId| {
            for observer in coin_flip_observers.iter_mut() {
                observer.on_coin_flip(event, favored);
            }
        };

        let placement = match apply_placement(
            &mut self.state,
            coord,
            card,
            self.tie_breaker.as_mut(),
            &mut notify,
        ) {
            Ok(placement) => placement,
            Err(err) => {
                tracing::warn!(%coord, card = card.name(), error = %err, "placement rejected");
                return Err(err);
            }
        };

        tracing::debug!(
            player = %placement.player,
            card = placement.card.name(),
            %coord,
            attacks = placement.attacks.len(),
            captured = placement.captured().count(),
            "card placed"
        );

        self.history.push_back(MoveRecord {
            turn: self.history.len() as u32 + 1,
            player: placement.player,
            coord,
            card: placement.card.name().to_string(),
            captured: placement.captured().collect(),
        });

        for observer in &mut self.game_observers {
            observer.on_move(coord, &placement.card, placement.player);
        }

        if placement.ended {
            let (first, second) = self.state.scores().into_tuple();
            tracing::info!(first, second, "game over");
            for observer in &mut self.game_observers {
                observer.on_game_end(&self.state);
            }
        }

        Ok(placement)
    }

    /// Apply a `Move` produced by a move source.
    pub fn play(&mut self, mv: &Move) -> Result<Placement> {
        self.place_card(mv.coord, &mv.card)
    }

    /// Ask each player's source for moves until the board is full.
    ///
    /// The first illegal move a source returns is reported as an error, with
    /// the game left as it was before that move.
    pub fn run(&mut self, sources: &mut PlayerPair<Box<dyn MoveSource>>) -> Result<GameResult> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            let player = self.state.next_player();
            let mv = sources[player].choose_move(&self.state);
            tracing::trace!(%player, %mv, "move chosen");
            self.play(&mv)?;
        }
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn scores(&self) -> PlayerPair<usize> {
        self.state.scores()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_ended()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Consume the engine, keeping the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("coin_flip_observers", &self.coin_flip_observers.len())
            .field("game_observers", &self.game_observers.len())
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

/// Builder for a `GameEngine`.
///
/// Game observers registered here receive `on_game_start` when `build` is
/// called.
pub struct GameEngineBuilder {
    hands: PlayerPair<Vec<Card>>,
    starting_player: PlayerId,
    tie_breaker: Option<Box<dyn TieBreaker>>,
    coin_flip_observers: Vec<Box<dyn CoinFlipObserver>>,
    game_observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngineBuilder {
    #[must_use]
    pub fn new(hands: PlayerPair<Vec<Card>>) -> Self {
        Self {
            hands,
            starting_player: PlayerId::FIRST,
            tie_breaker: None,
            coin_flip_observers: Vec::new(),
            game_observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Decide coin flips with `tie_breaker`.
    #[must_use]
    pub fn tie_breaker(mut self, tie_breaker: impl TieBreaker + 'static) -> Self {
        self.tie_breaker = Some(Box::new(tie_breaker));
        self
    }

    /// Decide coin flips with a `GameRng` seeded from `seed`.
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.tie_breaker(GameRng::new(seed))
    }

    #[must_use]
    pub fn coin_flip_observer(mut self, observer: impl CoinFlipObserver + 'static) -> Self {
        self.coin_flip_observers.push(Box::new(observer));
        self
    }

    #[must_use]
    pub fn game_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.game_observers.push(Box::new(observer));
        self
    }

    /// Start the game. Without an explicit tie-breaker, coin flips use a
    /// `GameRng` seeded from OS entropy.
    ///
    /// Fails with `InvalidConfig` unless the starting player holds at least
    /// 5 cards and the other player at least 4, enough to fill the board.
    pub fn build(self) -> Result<GameEngine> {
        let needed = PlayerPair::from_fn(|player| {
            if player == self.starting_player {
                MIN_HAND_SIZE
            } else {
                BOARD_SIZE * BOARD_SIZE - MIN_HAND_SIZE
            }
        });
        for (player, hand) in self.hands.iter() {
            if hand.len() < needed[player] {
                return Err(TarockError::InvalidConfig(format!(
                    "{player} holds {} cards but needs at least {} to fill the board",
                    hand.len(),
                    needed[player]
                )));
            }
        }

        let state = GameState::new(self.hands, self.starting_player);
        let tie_breaker: Box<dyn TieBreaker> = match self.tie_breaker {
            Some(tie_breaker) => tie_breaker,
            None => Box::new(GameRng::from_entropy()),
        };

        let mut engine = GameEngine {
            state,
            tie_breaker,
            coin_flip_observers: self.coin_flip_observers,
            game_observers: self.game_observers,
            history: Vector::new(),
        };

        tracing::info!(starting_player = %engine.state.next_player(), "game started");
        for observer in &mut engine.game_observers {
            observer.on_game_start(&engine.state);
        }

        Ok(engine)
    }
}
