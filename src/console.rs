#![cfg(feature = "std")]

//! A single console session: menu, one selection, one level.

use std::io::{BufRead, Write};

use crate::levels::Level;
use crate::menu::{read_selection, write_menu};

/// Print the menu, read a selection from `input` and show the chosen level.
///
/// Returns the level shown, or `None` when the input held no integer. A
/// failed read is not an error: the session just ends after the menu.
pub fn run_session<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<Option<Level>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write_menu(output)?;
    let selection = match read_selection(input) {
        Ok(Some(selection)) => selection,
        Ok(None) => {
            log::debug!("no integer selection on input, leaving");
            return Ok(None);
        }
        Err(e) => {
            log::debug!("reading selection failed: {}", e);
            return Ok(None);
        }
    };
    let level = Level::from_selection(selection);
    log::debug!("selection {} -> {:?}", selection, level);
    show_level(level, output)?;
    Ok(Some(level))
}

/// Render `level` and write it to `output` in one go.
pub fn show_level<W: Write + ?Sized>(level: Level, output: &mut W) -> anyhow::Result<()> {
    let mut text = String::new();
    level.render(&mut text)?;
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}
