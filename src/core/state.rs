//! Game state: board, hands, turn and terminal flag.
//!
//! ## GameState
//!
//! - Board (3×3 cells with owners)
//! - Both players' hands, in deal order
//! - The player to move next
//! - Whether the game has ended (board full)
//!
//! Scores, phase, result and legal moves are derived on demand, never stored.
//!
//! Hands use `im` persistent vectors, so `clone()` shares structure with
//! the original but is still an independent value: mutating the clone never
//! affects the source. Move simulation relies on this.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::player::{PlayerId, PlayerPair};
use crate::board::Board;
use crate::cards::Card;
use crate::rules::{GameResult, Phase};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    hands: PlayerPair<Vector<Card>>,
    next_player: PlayerId,
    ended: bool,
}

impl GameState {
    /// Create the starting state: empty board, the given hands, and
    /// `starting_player` to move.
    #[must_use]
    pub fn new(hands: PlayerPair<Vec<Card>>, starting_player: PlayerId) -> Self {
        Self {
            board: Board::new(),
            hands: hands.map(|hand| hand.iter().cloned().collect()),
            next_player: starting_player,
            ended: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<Card> {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerPair<Vector<Card>> {
        &self.hands
    }

    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    /// The stored terminal flag, updated after every placement.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    // === Derived queries ===

    /// Recompute whether the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.board.is_full()
    }

    /// Number of cells owned by each player.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<usize> {
        self.board.owned_counts()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.ended {
            Phase::Ended
        } else {
            Phase::AwaitingMove(self.next_player)
        }
    }

    /// Final result, or `None` while the game is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.ended {
            return None;
        }
        let (first, second) = self.scores().into_tuple();
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Every placement available to the next player: empty coordinates in
    /// row-major order, each paired with every card in hand order.
    ///
    /// Empty once the game has ended.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.ended {
            return Vec::new();
        }
        let hand = &self.hands[self.next_player];
        self.board
            .empty_coords()
            .into_iter()
            .flat_map(|coord| hand.iter().map(move |card| Move::new(coord, card.clone())))
            .collect()
    }

    /// Cards still in hands plus cards on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(|(_, hand)| hand.len()).sum::<usize>() + self.board.occupied_count()
    }

    // === Mutation (placement routine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Remove the first card in `player`'s hand with the same name as `card`.
    pub(crate) fn take_from_hand(&mut self, player: PlayerId, card: &Card) -> Option<Card> {
        let hand = &mut self.hands[player];
        let pos = hand.iter().position(|c| c == card)?;
        Some(hand.remove(pos))
    }

    pub(crate) fn hand_contains(&self, player: PlayerId, card: &Card) -> bool {
        self.hands[player].contains(card)
    }

    /// Hand the turn to the other player and refresh the terminal flag.
    pub(crate) fn finish_turn(&mut self) {
        self.next_player = self.next_player.opponent();
        self.ended = self.is_terminal();
    }
}
