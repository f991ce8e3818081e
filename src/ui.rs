//! Text layouts shared by the levels.
//!
//! Everything writes to a `core::fmt::Write` sink so the same code serves
//! stdout and in-memory buffers alike.

use core::fmt::{self, Write};

use crate::common::{CellGrid, Coord};

/// One `(row,col)` pair per line.
pub fn write_coords<W, I>(out: &mut W, coords: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Coord>,
{
    for coord in coords {
        writeln!(out, "{}", coord)?;
    }
    Ok(())
}

/// One row per line, each cell followed by a single space.
pub fn write_grid<W, G>(out: &mut W, grid: &G) -> fmt::Result
where
    W: Write + ?Sized,
    G: CellGrid + ?Sized,
{
    let n = grid.size();
    for r in 0..n {
        for c in 0..n {
            write!(out, "{} ", grid.cell(r, c))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
