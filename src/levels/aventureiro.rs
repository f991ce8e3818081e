//! Aventureiro: a full 10×10 board with four ships of length 4.

use core::fmt::Write;

use crate::board::{Board, BoardShip};
use crate::common::{GridError, LevelError};
use crate::config::{BOARD_SIZE, SEGMENT_LEN};
use crate::ship::{Orientation, ShipType};
use crate::ui::write_grid;

/// Ship, orientation and origin (row, col) of every ship on the board.
pub const FLEET: [(ShipType, Orientation, usize, usize); 4] = [
    (
        ShipType::new("Navio Horizontal", SEGMENT_LEN),
        Orientation::Horizontal,
        2,
        0,
    ),
    (
        ShipType::new("Navio Vertical", SEGMENT_LEN),
        Orientation::Vertical,
        0,
        5,
    ),
    (
        ShipType::new("Navio Diagonal", SEGMENT_LEN),
        Orientation::Diagonal,
        0,
        0,
    ),
    (
        ShipType::new("Navio Diagonal Secundária", SEGMENT_LEN),
        Orientation::AntiDiagonal,
        0,
        BOARD_SIZE as usize - 1,
    ),
];

/// The board with the whole fleet marked. The horizontal and diagonal
/// ships share cell (2,2).
pub fn board() -> Result<Board, GridError> {
    let mut board = Board::new();
    for (ship_type, orientation, row, col) in FLEET {
        board.place(&BoardShip::new(ship_type, orientation, row, col)?);
    }
    Ok(board)
}

pub fn render<W: Write + ?Sized>(out: &mut W) -> Result<(), LevelError> {
    write_grid(out, &board()?)?;
    Ok(())
}
