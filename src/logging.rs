#![cfg(feature = "std")]

//! Stderr logger for the binaries. Stdout belongs to the game console
//! (and to the JSON line printed by `sim`), so log lines never go there.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "ROGUE_FLEET_LOG";

/// Level used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Level named by `value`, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn log_level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install the stderr logger at the level read from [`LOG_ENV`] and
/// return that level. A second call keeps the first logger.
pub fn init_logging() -> LevelFilter {
    let level = log_level_from(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
