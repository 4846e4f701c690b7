//! Console Logger
//!
//! `log` backend that writes to the browser console (stderr on native
//! targets) and keeps the most recent lines in a circular buffer.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-size buffer of formatted log lines, oldest dropped first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    history: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            history: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// Most recent log lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }

    fn remember(&self, line: String) {
        match self.history.lock() {
            Ok(mut history) => history.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

/// Format one record as `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} {}: {}",
        Local::now().format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger globally. Returns the leaked instance so callers can
/// read back recent lines.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level, DEFAULT_CAPACITY)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("test")
                .args(format_args!("boom"))
                .build(),
        );

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("ERROR"));
        assert!(recent[0].ends_with("test: boom"));
    }
}
