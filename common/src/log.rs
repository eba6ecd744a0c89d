//! Leveled event log kept in a fixed ring buffer.
//!
//! The engine records what it did (fix accepted, store failure, mode change)
//! here instead of printing, so the host can show the tail on its debug page
//! and mirror entries to its own console.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log_info!(log, "fix {} {}", lat, lon);
//! log_warn!(log, "store: {}", err);
//!
//! for entry in log.iter() {
//!     println!("{} {}", entry.level.prefix(), entry.message);
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{GRAY, GREEN, RED, YELLOW};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of entries kept in the ring buffer.
pub const LOG_ENTRIES: usize = 8;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

// =============================================================================
// Log Level
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace = 0,
    /// Debug information (gray)
    Debug = 1,
    /// Normal operation (green)
    #[default]
    Info = 2,
    /// Warnings (yellow)
    Warn = 3,
    /// Errors (red)
    Error = 4,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

// =============================================================================
// Log Entry
// =============================================================================

/// A single log entry.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Monotonic entry number, so hosts can tell which entries they already mirrored.
    pub sequence: u32,
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of the last `LOG_ENTRIES` events. Oldest entries are dropped.
pub struct EventLog {
    buffer: Deque<LogEntry, LOG_ENTRIES>,
    next_sequence: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            next_sequence: 0,
        }
    }

    /// Push a message. If the buffer is full the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut message: String<LOG_MSG_LEN> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            message.push(c).ok();
        }

        let entry = LogEntry {
            level,
            message,
            sequence: self.next_sequence,
        };
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.buffer.push_back(entry).ok();
    }

    /// Iterate over entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.buffer.iter() }

    /// Entries with a sequence number at or after `sequence`.
    pub fn since(
        &self,
        sequence: u32,
    ) -> impl Iterator<Item = &LogEntry> {
        self.buffer.iter().filter(move |entry| entry.sequence >= sequence)
    }

    /// Sequence number the next entry will get.
    #[inline]
    pub const fn next_sequence(&self) -> u32 { self.next_sequence }

    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Logging Macros
// =============================================================================

/// Format into a log buffer at an explicit level.
#[macro_export]
macro_rules! log_event {
    ($log:expr, $level:expr, $($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::log::LOG_MSG_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $log.push($level, buf.as_str());
    }};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)*) => { $crate::log_event!($log, $crate::log::LogLevel::Debug, $($arg)*) };
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)*) => { $crate::log_event!($log, $crate::log::LogLevel::Info, $($arg)*) };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $($arg:tt)*) => { $crate::log_event!($log, $crate::log::LogLevel::Warn, $($arg)*) };
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($log:expr, $($arg:tt)*) => { $crate::log_event!($log, $crate::log::LogLevel::Error, $($arg)*) };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(LogLevel::Info, "Test message");
        assert_eq!(log.len(), 1);

        log.push(LogLevel::Warn, "Another message");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().last().unwrap().level, LogLevel::Warn);
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();
        for i in 0..LOG_ENTRIES {
            log_info!(log, "{}", i);
        }
        assert_eq!(log.len(), LOG_ENTRIES);

        log.push(LogLevel::Info, "New");
        assert_eq!(log.len(), LOG_ENTRIES);

        // "0" was dropped
        let first = log.iter().next().unwrap();
        assert_eq!(first.message.as_str(), "1");
        assert_eq!(first.sequence, 1);
    }

    #[test]
    fn test_event_log_truncation() {
        let mut log = EventLog::new();
        log.push(LogLevel::Debug, "This is a very long message that exceeds the maximum line length limit");

        let stored = log.iter().next().unwrap();
        assert!(stored.message.len() < LOG_MSG_LEN);
    }

    #[test]
    fn test_since_filters_mirrored_entries() {
        let mut log = EventLog::new();
        log_warn!(log, "a");
        let mark = log.next_sequence();
        log_error!(log, "b {}", 2);
        let fresh: Vec<&str> = log.since(mark).map(|e| e.message.as_str()).collect();
        assert_eq!(fresh, ["b 2"]);
    }

    #[test]
    fn test_level_prefix_and_order() {
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert!(LogLevel::Error > LogLevel::Info);
        assert_eq!(LogLevel::Info.color(), GREEN);
    }
}
