//! Log sink that collects records for display inside the TUI.
//!
//! Writing to stderr would corrupt the alternate screen, so the game installs
//! this sink and the table screen shows the most recent line.

use std::sync::{Arc, Mutex};

use log::{LevelFilter, Log, Metadata, Record};

/// Shared buffer of formatted log lines, newest last.
pub type LogBuffer = Arc<Mutex<Vec<String>>>;

const MAX_LINES: usize = 100;

/// A [`Log`] implementation backed by an in-memory line buffer.
pub struct TuiLogger {
    buffer: LogBuffer,
}

impl TuiLogger {
    /// Creates a logger and the buffer it writes into.
    #[must_use]
    pub fn new() -> (Self, LogBuffer) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                buffer: Arc::clone(&buffer),
            },
            buffer,
        )
    }

    /// Installs the logger as the global sink and returns its buffer.
    ///
    /// Does nothing beyond returning the buffer if a global logger is
    /// already set.
    pub fn install(level: LevelFilter) -> LogBuffer {
        let (logger, buffer) = Self::new();
        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(level);
        }
        buffer
    }
}

impl Log for TuiLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(format!("{}", record.args()));
            if buffer.len() > MAX_LINES {
                buffer.remove(0);
            }
        }
    }

    fn flush(&self) {}
}
