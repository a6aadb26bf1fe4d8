//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to the platform sink (browser console on
//! wasm32, stderr elsewhere).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Push a line, dropping the oldest one once the buffer is full
    fn push(&self, line: LogLine) {
        let mut lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(guard) => guard.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        sink::write(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger
///
/// Safe to call once; a second call returns the `SetLoggerError` from `log`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// The most recent `limit` lines, newest last
pub fn recent(limit: usize) -> Vec<LogLine> {
    let Some(logger) = LOGGER.get() else {
        return Vec::new();
    };
    let lines = logger.lines();
    let skip = lines.len().saturating_sub(limit);
    lines.into_iter().skip(skip).collect()
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogLine;
    use log::Level;

    pub fn write(line: &LogLine) {
        let text = line.to_string().into();
        match line.level {
            Level::Error => web_sys::console::error_1(&text),
            Level::Warn => web_sys::console::warn_1(&text),
            Level::Info => web_sys::console::info_1(&text),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&text),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogLine;

    pub fn write(line: &LogLine) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_into(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            record_into(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].message, "line 2");
        assert_eq!(lines[2].message, "line 4");
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        record_into(&logger, Level::Info, "ignored");
        record_into(&logger, Level::Error, "kept");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        record_into(&logger, Level::Info, "a");
        record_into(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
    }

    #[test]
    fn test_display_contains_target_and_message() {
        let logger = RollingLogger::new(LevelFilter::Info, 1);
        record_into(&logger, Level::Warn, "hello");
        let rendered = logger.lines()[0].to_string();
        assert!(rendered.contains("[test] hello"));
        assert!(rendered.contains("WARN"));
    }
}
