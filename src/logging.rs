//! Minimal `log` backend: one line per record on stderr.
//!
//! Lines look like `[   12.345 I launcher::app] Home -> Clock`, with the time in
//! seconds since the logger was installed and a single-character level prefix.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Stderr logger with uptime timestamps.
struct StderrLogger {
    started: OnceLock<Instant>,
}

static LOGGER: StderrLogger = StderrLogger {
    started: OnceLock::new(),
};

/// Install the logger and let records up to `level` through.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    LOGGER.started.get_or_init(Instant::now);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Single-character prefix for a level.
pub const fn prefix(level: Level) -> char {
    match level {
        Level::Trace => 'T',
        Level::Debug => 'D',
        Level::Info => 'I',
        Level::Warn => 'W',
        Level::Error => 'E',
    }
}

impl Log for StderrLogger {
    fn enabled(
        &self,
        metadata: &Metadata<'_>,
    ) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(
        &self,
        record: &Record<'_>,
    ) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let uptime = self.started.get_or_init(Instant::now).elapsed();
        // Nowhere left to report a failing stderr
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:>8.3} {} {}] {}",
            uptime.as_secs_f64(),
            prefix(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) { let _ = std::io::stderr().flush(); }
}
