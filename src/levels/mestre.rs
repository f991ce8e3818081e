//! Mestre: the three ability patterns.

use core::fmt::Write;

use crate::common::{GridError, LevelError};
use crate::pattern::{Pattern, PatternRows};
use crate::ui::write_grid;

pub const CONE: PatternRows = [
    [0, 0, 1, 0, 0],
    [0, 1, 1, 1, 0],
    [1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

pub const CRUZ: PatternRows = [
    [0, 0, 1, 0, 0],
    [1, 1, 1, 1, 1],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

// Differs from CRUZ only in row 1; kept as published.
pub const OCTAEDRO: PatternRows = [
    [0, 0, 1, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

/// Patterns in print order.
pub const ABILITIES: [(&str, PatternRows); 3] =
    [("Cone", CONE), ("Cruz", CRUZ), ("Octaedro", OCTAEDRO)];

pub fn patterns() -> Result<[Pattern; 3], GridError> {
    let [(cone, cone_rows), (cruz, cruz_rows), (octaedro, octaedro_rows)] = ABILITIES;
    Ok([
        Pattern::from_rows(cone, &cone_rows)?,
        Pattern::from_rows(cruz, &cruz_rows)?,
        Pattern::from_rows(octaedro, &octaedro_rows)?,
    ])
}

pub fn render<W: Write + ?Sized>(out: &mut W) -> Result<(), LevelError> {
    for pattern in patterns()?.iter() {
        writeln!(out)?;
        writeln!(out, "Habilidade {}:", pattern.name())?;
        write_grid(out, pattern)?;
    }
    Ok(())
}
