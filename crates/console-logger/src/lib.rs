//! Console Logger
//!
//! A `tracing-subscriber` writer for browser builds. Every formatted line is
//! forwarded to the devtools console at the matching level and kept in a
//! bounded rolling buffer, so recent log output can be inspected from the UI.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Default number of lines kept by [`init`]
pub const DEFAULT_CAPACITY: usize = 200;

/// One formatted log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub recorded_at: DateTime<Utc>,
    pub level: Level,
    pub text: String,
}

/// `HH:MM:SS` (UTC) followed by the formatted line, which already carries the level
impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.recorded_at.format("%H:%M:%S"), self.text)
    }
}

/// Circular buffer of the most recent log lines
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, dropping the oldest one when full
    pub fn push(&self, line: LogLine) {
        let mut lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest-first copy of the buffered lines
    pub fn snapshot(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(guard) => guard.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `MakeWriter` handed to the fmt layer
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    buffer: Arc<RollingBuffer>,
}

impl ConsoleMakeWriter {
    pub fn new(buffer: Arc<RollingBuffer>) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.buffer.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.buffer.clone())
    }
}

/// Collects the bytes of one event; emits them on drop
pub struct ConsoleWriter {
    level: Level,
    bytes: Vec<u8>,
    buffer: Arc<RollingBuffer>,
}

impl ConsoleWriter {
    fn new(level: Level, buffer: Arc<RollingBuffer>) -> Self {
        Self {
            level,
            bytes: Vec::new(),
            buffer,
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        if text.is_empty() {
            return;
        }
        console_out(self.level, &text);
        self.buffer.push(LogLine {
            recorded_at: Utc::now(),
            level: self.level,
            text,
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn console_out(level: Level, text: &str) {
    let value = wasm_bindgen::JsValue::from_str(text);
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::log_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_out(_level: Level, text: &str) {
    eprintln!("{}", text);
}

/// Install the global subscriber. Returns the buffer the writer fills.
///
/// Timestamps are left out of the formatted line (`std::time` is not
/// available on wasm32); each buffered [`LogLine`] carries its own.
pub fn init(
    max_level: Level,
    capacity: usize,
) -> Result<Arc<RollingBuffer>, Box<dyn std::error::Error + Send + Sync>> {
    let buffer = Arc::new(RollingBuffer::new(capacity));
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(ConsoleMakeWriter::new(buffer.clone()))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn line(text: &str) -> LogLine {
        LogLine {
            recorded_at: Utc::now(),
            level: Level::INFO,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(line(&format!("line {}", i)));
        }

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "line 2");
        assert_eq!(lines[2].text, "line 4");
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = RollingBuffer::new(0);
        buffer.push(line("a"));
        buffer.push(line("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.snapshot()[0].text, "b");
    }

    #[test]
    fn test_writer_emits_on_drop() {
        let buffer = Arc::new(RollingBuffer::new(10));
        {
            let mut writer = ConsoleWriter::new(Level::WARN, buffer.clone());
            writer.write_all(b"[API] request failed").unwrap();
            writer.write_all(b" with 500\n").unwrap();
            assert!(buffer.is_empty());
        }

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "[API] request failed with 500");
        assert_eq!(lines[0].level, Level::WARN);
    }

    #[test]
    fn test_blank_event_is_not_buffered() {
        let buffer = Arc::new(RollingBuffer::new(10));
        {
            let mut writer = ConsoleWriter::new(Level::INFO, buffer.clone());
            writer.write_all(b"  \n").unwrap();
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_log_line_display() {
        let entry = LogLine {
            recorded_at: chrono::TimeZone::with_ymd_and_hms(&Utc, 2025, 3, 4, 9, 5, 7).unwrap(),
            level: Level::WARN,
            text: " WARN [API] GET /stats -> 500".to_string(),
        };
        assert_eq!(entry.to_string(), "09:05:07  WARN [API] GET /stats -> 500");
    }

    #[test]
    fn test_make_writer_uses_event_level() {
        let buffer = Arc::new(RollingBuffer::new(10));
        let make = ConsoleMakeWriter::new(buffer.clone());
        {
            let mut writer = make.make_writer();
            writer.write_all(b"hello").unwrap();
        }
        assert_eq!(buffer.snapshot()[0].level, Level::INFO);
    }
}
