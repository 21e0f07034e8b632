//! The 3×3 board and its cells.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Occupant};
pub use grid::Board;
