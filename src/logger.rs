//! Custom logging module.
//!
//! This module provides the process logger. Records are written to stdout,
//! errors to stderr. While the form owns the terminal, records are held in
//! memory and written out in order once the terminal is restored.

use crate::error::{AppError, AppResult};
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::io::{self, Write};

const PREFIX: &str = "usermaker: ";

static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Format a log record into a single output line.
///
pub fn format_log(record: &Record) -> String {
    let timestamp = Local::now().format("%Y/%m/%d %H:%M:%S");
    match record.level() {
        Level::Error => format!("{} {}[ERROR] {}", timestamp, PREFIX, record.args()),
        _ => format!("{} {}{}", timestamp, PREFIX, record.args()),
    }
}

/// Install the process logger at the given level.
///
pub fn init(level: LevelFilter) -> AppResult<&'static Logger> {
    log::set_logger(&*LOGGER).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(&*LOGGER)
}

/// Logger writing prefixed lines to the standard streams.
///
pub struct Logger {
    held: Mutex<Option<Vec<(Level, String)>>>,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            held: Mutex::new(None),
        }
    }

    /// Keep records in memory until `release` is called.
    ///
    pub fn hold(&self) {
        let mut held = self.held.lock();
        if held.is_none() {
            *held = Some(Vec::new());
        }
    }

    /// Write out held records and go back to writing immediately.
    ///
    pub fn release(&self) {
        for (level, line) in self.take_held() {
            emit(level, &line);
        }
    }

    /// Return true while records are being held.
    ///
    pub fn is_holding(&self) -> bool {
        self.held.lock().is_some()
    }

    fn take_held(&self) -> Vec<(Level, String)> {
        self.held.lock().take().unwrap_or_default()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_log(record);
        match self.held.lock().as_mut() {
            Some(held) => held.push((record.level(), line)),
            None => emit(record.level(), &line),
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

fn emit(level: Level, line: &str) {
    // Nothing sensible is left to report a failed write to.
    let _ = match level {
        Level::Error => writeln!(io::stderr(), "{}", line),
        _ => writeln!(io::stdout(), "{}", line),
    };
}
