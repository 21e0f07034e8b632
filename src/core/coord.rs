//! Board coordinates.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::{Result, TarockError};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// A `(row, col)` position. Only positions with both axes in `0..3` are on
/// the board; constructing an off-board `Coord` is allowed so callers can
/// pass one in and get an `OutOfBounds` error back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies on the 3×3 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Fail with `OutOfBounds` unless the coordinate is on the board.
    pub fn checked(self) -> Result<Self> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(TarockError::OutOfBounds {
                row: isize::try_from(self.row).unwrap_or(isize::MAX),
                col: isize::try_from(self.col).unwrap_or(isize::MAX),
            })
        }
    }

    /// The neighbouring coordinate one step in `direction`.
    ///
    /// Fails with `OutOfBounds` if the step leaves the board; there is no
    /// wraparound.
    pub fn step(self, direction: Direction) -> Result<Self> {
        let origin = self.checked()?;
        let (dr, dc) = direction.offset();
        let row = origin.row as isize + dr;
        let col = origin.col as isize + dc;

        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Ok(Self::new(row as usize, col as usize))
        } else {
            Err(TarockError::OutOfBounds { row, col })
        }
    }

    /// All on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
