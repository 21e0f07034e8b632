//! The 3×3 board.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Occupant};
use crate::cards::Card;
use crate::core::{Coord, Direction, PlayerId, PlayerPair, Result, TarockError, BOARD_SIZE};

/// Fixed 3×3 grid of cells.
///
/// Every accessor taking a `Coord` fails with `OutOfBounds` for positions
/// off the board instead of wrapping or panicking.
///
/// ## Example
///
/// ```
/// use tarock::{Board, Coord, Direction};
///
/// let board = Board::new();
/// assert_eq!(board.empty_coords().len(), 9);
///
/// let dir = Board::direction_between(Coord::new(1, 1), Coord::new(0, 1)).unwrap();
/// assert_eq!(dir, Direction::Up);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    pub fn cell(&self, coord: Coord) -> Result<&Cell> {
        let coord = coord.checked()?;
        Ok(&self.cells[coord.row][coord.col])
    }

    pub fn is_empty(&self, coord: Coord) -> Result<bool> {
        Ok(self.cell(coord)?.is_empty())
    }

    /// Owner of the card at `coord`, or `None` if the cell is empty.
    pub fn owner_at(&self, coord: Coord) -> Result<Option<PlayerId>> {
        Ok(self.cell(coord)?.owner())
    }

    /// Empty coordinates in row-major order.
    #[must_use]
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::all().filter(|c| self.cells[c.row][c.col].is_empty()).collect()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &Occupant)> + '_ {
        Coord::all().filter_map(move |c| self.cells[c.row][c.col].occupant().map(|o| (c, o)))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// True when no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of cells owned by each player.
    #[must_use]
    pub fn owned_counts(&self) -> PlayerPair<usize> {
        let mut counts = PlayerPair::with_value(0);
        for (_, occupant) in self.occupied() {
            counts[occupant.owner] += 1;
        }
        counts
    }

    // === Geometry ===

    /// The coordinate one step from `coord` in `direction`.
    pub fn adjacent_coord(coord: Coord, direction: Direction) -> Result<Coord> {
        coord.step(direction)
    }

    /// Direction in which `neighbor` lies as seen from `origin`.
    ///
    /// Fails with `NotAdjacent` for diagonal, distant or identical
    /// coordinates.
    pub fn direction_between(origin: Coord, neighbor: Coord) -> Result<Direction> {
        let origin = origin.checked()?;
        let neighbor = neighbor.checked()?;

        Direction::ALL
            .into_iter()
            .find(|&d| origin.step(d) == Ok(neighbor))
            .ok_or(TarockError::NotAdjacent { origin, neighbor })
    }

    // === Mutation ===

    /// Put `card` on an empty cell, owned by `owner`.
    pub(crate) fn place(&mut self, coord: Coord, card: Card, owner: PlayerId) -> Result<()> {
        if !self.is_empty(coord)? {
            return Err(TarockError::CellOccupied(coord));
        }
        self.cells[coord.row][coord.col] = Cell::occupied(card, owner);
        Ok(())
    }

    /// Transfer ownership of an occupied cell. Empty cells are left alone.
    pub(crate) fn set_owner(&mut self, coord: Coord, owner: PlayerId) -> Result<bool> {
        let coord = coord.checked()?;
        Ok(self.cells[coord.row][coord.col].set_owner(owner))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
