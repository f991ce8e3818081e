//! The 10×10 board, built by marking ships onto an occupancy `BitBoard`.

use crate::bitboard::BitBoard;
use crate::common::CellGrid;
use crate::config::{BOARD_SIZE, SHIP_MARK};
use crate::ship::Ship;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Ship sized for the main board.
pub type BoardShip = Ship<u128, { BOARD_SIZE as usize }>;

/// Main board: every cell covered by at least one ship reads as
/// [`SHIP_MARK`], every other cell as `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
}

impl Board {
    /// Create an empty board (all cells `0`).
    pub fn new() -> Self {
        Board {
            ship_map: BB::new(),
        }
    }

    /// Mark every cell of `ship`. Ships may cross; a shared cell keeps the
    /// same mark.
    pub fn place(&mut self, ship: &BoardShip) {
        log::trace!(
            "marking {} at {:?} going {:?}",
            ship.ship_type().name(),
            ship.origin(),
            ship.orientation()
        );
        self.ship_map |= ship.mask();
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.ship_map.get(row, col).unwrap_or(false)
    }
}

impl CellGrid for Board {
    fn size(&self) -> usize {
        self.ship_map.size()
    }

    fn cell(&self, row: usize, col: usize) -> u8 {
        if self.is_occupied(row, col) {
            SHIP_MARK
        } else {
            0
        }
    }
}
