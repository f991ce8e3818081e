//! Novato: two ships listed by coordinates, no board drawn.

use core::fmt::Write;

use crate::board::BoardShip;
use crate::common::{GridError, LevelError};
use crate::config::NOVATO_SHIP_LEN;
use crate::ship::{Orientation, ShipType};
use crate::ui::write_coords;

pub const VERTICAL: ShipType = ShipType::new("Navio Vertical", NOVATO_SHIP_LEN);
pub const HORIZONTAL: ShipType = ShipType::new("Navio Horizontal", NOVATO_SHIP_LEN);

/// The vertical ship at (0,0) and the horizontal ship at (4,1), in print order.
pub fn ships() -> Result<[BoardShip; 2], GridError> {
    Ok([
        BoardShip::new(VERTICAL, Orientation::Vertical, 0, 0)?,
        BoardShip::new(HORIZONTAL, Orientation::Horizontal, 4, 1)?,
    ])
}

pub fn render<W: Write + ?Sized>(out: &mut W) -> Result<(), LevelError> {
    for (i, ship) in ships()?.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} (coordenadas):", ship.ship_type().name())?;
        write_coords(out, ship.cells())?;
    }
    Ok(())
}
