//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Player indices are
//! 0-based: the first player is `PlayerId::FIRST`.
//!
//! ## PlayerPair
//!
//! Exactly one value per player, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a game of Tarock.
pub const PLAYER_COUNT: usize = 2;

/// Identifier of one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "Tarock has exactly two players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players, first seat first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(format!("player index {id} is out of range"))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per player.
///
/// ## Example
///
/// ```
/// use tarock::{PlayerId, PlayerPair};
///
/// let mut scores = PlayerPair::with_value(0);
/// scores[PlayerId::SECOND] += 3;
///
/// assert_eq!(scores[PlayerId::FIRST], 0);
/// assert_eq!(scores[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair from the first and second player's values.
    pub fn new(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Create a pair from a factory function.
    pub fn from_fn(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::new(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerPair<U> {
        PlayerPair::new(f(&self.data[0]), f(&self.data[1]))
    }

    /// Unpack into `(first, second)`.
    pub fn into_tuple(self) -> (T, T) {
        let [first, second] = self.data;
        (first, second)
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
