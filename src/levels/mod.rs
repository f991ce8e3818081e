//! The three display levels and the menu-number dispatch between them.

pub mod aventureiro;
pub mod mestre;
pub mod novato;

use core::fmt::Write;

use crate::common::LevelError;

/// One of the fixed display modes offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Coordinate lists of two small ships.
    Novato,
    /// Full board with four ships, including diagonals.
    Aventureiro,
    /// Ability area patterns.
    Mestre,
}

impl Level {
    /// Levels in menu order.
    pub const ALL: [Level; 3] = [Level::Novato, Level::Aventureiro, Level::Mestre];

    /// Map a menu selection to a level. `1` and `2` pick the first two
    /// levels; every other integer falls through to [`Level::Mestre`].
    pub fn from_selection(selection: i64) -> Self {
        match selection {
            1 => Level::Novato,
            2 => Level::Aventureiro,
            _ => Level::Mestre,
        }
    }

    /// Number shown next to the level in the menu.
    pub fn menu_number(self) -> u8 {
        match self {
            Level::Novato => 1,
            Level::Aventureiro => 2,
            Level::Mestre => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Novato => "Novato",
            Level::Aventureiro => "Aventureiro",
            Level::Mestre => "Mestre",
        }
    }

    /// Write the level's title line followed by its content.
    pub fn render<W: Write + ?Sized>(self, out: &mut W) -> Result<(), LevelError> {
        log::debug!("rendering level {}", self.name());
        writeln!(out, "=== Nível {} ===", self.name())?;
        match self {
            Level::Novato => novato::render(out),
            Level::Aventureiro => aventureiro::render(out),
            Level::Mestre => mestre::render(out),
        }
    }
}
