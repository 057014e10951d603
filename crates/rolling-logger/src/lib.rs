//! Rolling Logger
//!
//! A `log` backend with a circular buffer. The newest records are kept in
//! memory (oldest dropped first) and each record is mirrored to the browser
//! console on wasm32, or to stderr elsewhere.

use std::collections::VecDeque;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

/// Records kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Maximum records held in the buffer (at least one)
    pub capacity: usize,
    pub level: LevelFilter,
    /// Mirror records to the console
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: LevelFilter::Info,
            console: true,
        }
    }
}

/// One buffered record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "{} [{}] {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    config: LoggerConfig,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            config: LoggerConfig { capacity, ..config },
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = self.buffer.lock();
        while buffer.len() >= self.config.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.config.console {
            write_console(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    let line = entry.format();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{}", entry.format());
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if any logger is already set.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let level = config.level;
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Records held by the global logger, oldest first
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::entries).unwrap_or_default()
}

/// Drop everything the global logger has buffered
pub fn clear_recent() {
    if let Some(logger) = LOGGER.get() {
        logger.clear();
    }
}
