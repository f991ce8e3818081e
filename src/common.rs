//! Common types: coordinates, the read-only grid view and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A (row, column) pair, displayed as `(row,col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Square table of small integers that can be printed cell by cell.
pub trait CellGrid {
    /// Side length of the table.
    fn size(&self) -> usize;

    /// Value at (`row`, `col`). Cells outside the table read as `0`.
    fn cell(&self, row: usize, col: usize) -> u8;
}

/// Errors raised while building boards, ships and patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Ship does not fit inside the board from its origin.
    ShipOutOfBounds,
    /// Pattern literal holds something other than 0 or 1.
    InvalidPatternCell { row: usize, col: usize, value: u8 },
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        GridError::BitBoardError(err)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GridError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GridError::InvalidPatternCell { row, col, value } => write!(
                f,
                "Pattern cell ({},{}) holds {}, expected 0 or 1",
                row, col, value
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Errors raised while rendering a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Level data could not be built.
    Grid(GridError),
    /// The output sink refused a write.
    Write,
}

impl From<GridError> for LevelError {
    fn from(err: GridError) -> Self {
        LevelError::Grid(err)
    }
}

impl From<fmt::Error> for LevelError {
    fn from(_: fmt::Error) -> Self {
        LevelError::Write
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Grid(e) => write!(f, "{}", e),
            LevelError::Write => write!(f, "failed to write level output"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LevelError {}
