//! 5×5 ability patterns.

use crate::bitboard::BitBoard;
use crate::common::{CellGrid, GridError};
use crate::config::{PATTERN_MARK, PATTERN_SIZE};

type PB = BitBoard<u32, { PATTERN_SIZE as usize }>;

/// Row-major literal for a pattern: `1` marks an affected cell.
pub type PatternRows = [[u8; PATTERN_SIZE as usize]; PATTERN_SIZE as usize];

/// A named ability area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    mask: PB,
}

impl Pattern {
    /// Build a pattern from its literal rows. Only `0` and `1` are accepted.
    pub fn from_rows(name: &'static str, rows: &PatternRows) -> Result<Self, GridError> {
        let mut mask = PB::try_new()?;
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => mask.set(r, c)?,
                    _ => return Err(GridError::InvalidPatternCell { row: r, col: c, value }),
                }
            }
        }
        Ok(Pattern { name, mask })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl CellGrid for Pattern {
    fn size(&self) -> usize {
        self.mask.size()
    }

    fn cell(&self, row: usize, col: usize) -> u8 {
        if self.mask.get(row, col).unwrap_or(false) {
            PATTERN_MARK
        } else {
            0
        }
    }
}
