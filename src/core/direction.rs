//! Board adjacency directions.
//!
//! ## Direction
//!
//! One of the four orthogonal directions on the 3×3 board. Iteration order
//! is always `Up, Down, Left, Right`; attack events are generated in that
//! order.
//!
//! ## DirectionSet
//!
//! A compact set of directions, used for a card's overpower trait.

use serde::{Deserialize, Serialize};

/// One of the four orthogonal board directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction pointing the other way.
    ///
    /// ```
    /// use tarock::Direction;
    ///
    /// for d in Direction::ALL {
    ///     assert_eq!(d.opposite().opposite(), d);
    /// }
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        };
        f.write_str(arrow)
    }
}

/// A set of directions stored as a bit mask.
///
/// ## Example
///
/// ```
/// use tarock::{Direction, DirectionSet};
///
/// let set = DirectionSet::from_iter([Direction::Up, Direction::Right]);
/// assert!(set.contains(Direction::Up));
/// assert!(!set.contains(Direction::Down));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set holding every direction.
    #[must_use]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    /// Add a direction (builder pattern).
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Add a direction in place.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl std::fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for direction in self.iter() {
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}
