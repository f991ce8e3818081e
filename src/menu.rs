#![cfg(feature = "std")]

//! Level menu: the printed choices and reading the player's selection.

use std::io::{self, BufRead, Write};

use crate::levels::Level;

pub const MENU_HEADER: &str = "===== Batalha Naval — Escolha o Nível =====";
pub const PROMPT: &str = "Escolha: ";

/// Print the menu and leave the cursor after the prompt.
pub fn write_menu<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MENU_HEADER)?;
    for level in Level::ALL {
        writeln!(out, "{}) {}", level.menu_number(), level.name())?;
    }
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// Whitespace as C's `isspace` sees it: ASCII whitespace plus vertical tab.
fn is_c_space(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == 0x0b
}

/// Parse a leading decimal integer, `scanf("%d")` style.
///
/// Leading whitespace is skipped, a sign is optional, at least one digit is
/// required and anything after the digits is ignored. Values beyond `i64`
/// saturate.
pub fn parse_selection<S: AsRef<[u8]> + ?Sized>(input: &S) -> Option<i64> {
    let bytes = input.as_ref();
    let mut i = 0;
    while i < bytes.len() && is_c_space(&bytes[i]) {
        i += 1;
    }
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit());
    let mut magnitude: i64 = 0;
    let mut seen = false;
    for &d in digits {
        seen = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(d - b'0'));
    }
    if !seen {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// Read lines until one holds something other than whitespace, then parse
/// it. Returns `Ok(None)` at end of input or when that line does not start
/// with an integer.
pub fn read_selection<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<i64>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.iter().all(is_c_space) {
            continue;
        }
        return Ok(parse_selection(&line[..]));
    }
}
