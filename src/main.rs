#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use batalha_naval::{init_logging, run_session, show_level, Level};
#[cfg(feature = "std")]
use clap::{error::ErrorKind, Parser};
#[cfg(feature = "std")]
use std::io;

/// Naval battle levels: ship coordinates, a full board and ability patterns.
#[derive(Parser, Default)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "Skip the menu and show this level (1, 2, anything else shows 3)"
    )]
    level: Option<i64>,

    /// Anything else on the command line is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("ignoring command line: {:?}", e.kind());
            Cli::default()
        }
    };
    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments {:?}", cli.ignored);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.level {
        Some(selection) => {
            let level = Level::from_selection(selection);
            log::debug!("--level {} -> {:?}", selection, level);
            show_level(level, &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_session(&mut input, &mut out)?;
        }
    }
    Ok(())
}
