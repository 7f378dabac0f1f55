//! Minimal `log` backend writing to stderr, so stdout only carries answers.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static STDERR_LOGGER: StderrLogger = StderrLogger;

pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger. Fails if a logger was already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&STDERR_LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
