//! A minimal logger for tests and tools that want to see what the builder is
//! doing. Only records from this crate are printed, to stderr.

use super::*;

use std::io::{self, Write};
use ::log::{Log, Record, Metadata, SetLoggerError, LevelFilter};

const TARGET: &str = "wasm_module_builder";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(TARGET)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        let _ = writeln!(stderr, "{} {} - {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Installs the logger. Fails if some logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    ::log::set_logger(&LOGGER)?;
    ::log::set_max_level(level);
    Ok(())
}
