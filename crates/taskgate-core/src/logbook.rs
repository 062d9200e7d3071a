//! The append-only run log.
//!
//! Every invocation writes exactly one line per decision (plus completion
//! or failure lines for the task body) of the form:
//!
//! ```text
//! [2026-08-29 14:00:03] Running main task...
//! ```
//!
//! Concurrent invocations may interleave whole lines in any order; the
//! file sink relies on the platform's O_APPEND guarantee to keep
//! individual lines intact. Nothing here locks or coordinates.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

/// Timestamp format used for every log line.
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build one log line from a message, without the trailing newline.
fn stamp(message: &str) -> String {
    format!("[{}] {message}", Local::now().format(STAMP_FORMAT))
}

/// An append-only destination for run log lines.
pub trait LogSink {
    /// Append one timestamped line.
    fn append(&self, message: &str) -> io::Result<()>;
}

/// Run log stored as a flat file, one open-append-close per line.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLogSink {
    fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}", stamp(message))
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages appended so far, without timestamps.
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for MemoryLogSink {
    fn append(&self, message: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
