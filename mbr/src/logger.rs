// Global log buffer for advisory messages
//
// Codec calls never print. Warnings raised while composing are kept here,
// newest entries overwriting the oldest once the buffer is full.

use alloc::vec::Vec;
use spin::Mutex;

const MAX_LOG_ENTRIES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub message: &'static str,
}

struct LogBuffer {
    entries: [Option<LogEntry>; MAX_LOG_ENTRIES],
    next: usize,
    total: usize,
}

impl LogBuffer {
    const fn new() -> Self {
        Self {
            entries: [None; MAX_LOG_ENTRIES],
            next: 0,
            total: 0,
        }
    }

    fn push(&mut self, entry: LogEntry) {
        self.entries[self.next] = Some(entry);
        self.next = (self.next + 1) % MAX_LOG_ENTRIES;
        self.total = self.total.saturating_add(1);
    }

    fn len(&self) -> usize {
        self.total.min(MAX_LOG_ENTRIES)
    }

    /// Entries oldest first; once wrapped, the oldest sits at `next`
    fn snapshot(&self) -> Vec<LogEntry> {
        let start = if self.total > MAX_LOG_ENTRIES {
            self.next
        } else {
            0
        };

        (0..self.len())
            .filter_map(|i| self.entries[(start + i) % MAX_LOG_ENTRIES])
            .collect()
    }
}

static LOG_BUFFER: Mutex<LogBuffer> = Mutex::new(LogBuffer::new());

pub fn log(level: Level, message: &'static str) {
    if cfg!(feature = "quiet") {
        return;
    }

    LOG_BUFFER.lock().push(LogEntry { level, message });
}

/// Buffered entries, oldest first
pub fn get_logs() -> Vec<LogEntry> {
    LOG_BUFFER.lock().snapshot()
}

pub fn log_count() -> usize {
    LOG_BUFFER.lock().len()
}

pub fn clear() {
    *LOG_BUFFER.lock() = LogBuffer::new();
}

// Macros for easier logging
#[macro_export]
macro_rules! log_info {
    ($msg:expr) => {
        $crate::logger::log($crate::logger::Level::Info, $msg)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($msg:expr) => {
        $crate::logger::log($crate::logger::Level::Warn, $msg)
    };
}
