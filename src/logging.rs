#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level filter such as `debug` or `off`. Unknown values yield `None`.
pub fn level_from_env_value(value: Option<&str>) -> Option<LevelFilter> {
    value.and_then(|lvl| lvl.trim().parse().ok())
}

/// Initialize logging with a level taken from the `BATALHA_NAVAL_LOG`
/// environment variable. Defaults to `warn` if the variable is not set or
/// invalid. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from_env_value(env::var(LOG_ENV_VAR).ok().as_deref())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
