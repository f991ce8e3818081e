//! Straight ships laid out on a `BitBoard`.

use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::{Coord, GridError};

/// Direction a ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right (↘).
    Diagonal,
    /// Down and to the left (↙).
    AntiDiagonal,
}

impl Orientation {
    /// Cell `step` positions away from (`row`, `col`), or `None` when it
    /// would fall left of column 0 or past `usize::MAX`.
    pub fn offset(self, row: usize, col: usize, step: usize) -> Option<(usize, usize)> {
        match self {
            Orientation::Horizontal => Some((row, col.checked_add(step)?)),
            Orientation::Vertical => Some((row.checked_add(step)?, col)),
            Orientation::Diagonal => Some((row.checked_add(step)?, col.checked_add(step)?)),
            Orientation::AntiDiagonal => Some((row.checked_add(step)?, col.checked_sub(step)?)),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board. Placement is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a ship at (`row`, `col`) extending along `orientation`.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GridError> {
        let len = ship_type.length();
        if row >= N || col >= N {
            return Err(GridError::ShipOutOfBounds);
        }
        if len > 0 {
            match orientation.offset(row, col, len - 1) {
                Some((r, c)) if r < N && c < N => {}
                _ => return Err(GridError::ShipOutOfBounds),
            }
        }
        let mask = BitBoard::<T, N>::from_cells(
            (0..len).filter_map(|step| orientation.offset(row, col, step)),
        )?;
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
        })
    }

    /// Cells covered by the ship, starting at its origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.ship_type.length())
            .filter_map(move |step| self.orientation.offset(self.row, self.col, step))
            .map(Coord::from)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}
