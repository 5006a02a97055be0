//! Terminal logger for the `log` facade
//!
//! Writes one line per record to stderr with a colored level tag, keeping
//! stdout free for results.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

struct TerminalLogger;

static LOGGER: TerminalLogger = TerminalLogger;

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = level_tag(record.level());
        // Nothing sensible to do if stderr is gone
        let _ = writeln!(std::io::stderr().lock(), "{tag} {}", record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_tag(level: Level) -> String {
    match level {
        Level::Error => "error".red().bold().to_string(),
        Level::Warn => " warn".yellow().bold().to_string(),
        Level::Info => " info".green().to_string(),
        Level::Debug => "debug".blue().to_string(),
        Level::Trace => "trace".bright_black().to_string(),
    }
}

/// Install the terminal logger at `level`
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
