//! Sinks receive every record the root lets through and write it somewhere. The two
//! built-in kinds cover stdout and rotating files; the `Sink` trait lets embedding
//! applications add their own without touching the dispatcher.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::{
    DEFAULT_BACKUP_COUNT, DEFAULT_MAX_BYTES, RotatingFileSink, RotationPolicy, dated_file_name,
};

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt;

/// Everything a sink needs to render one line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Local wall-clock time of the emission.
    pub time: DateTime<Local>,
    pub level: Level,
    /// Name of the logger the record was emitted through.
    pub name: String,
    /// Function the record was emitted from, when known.
    pub func: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub message: String,
}

/// Which built-in sink a trait object is, for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
    /// Application-provided sink.
    Custom,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Console => "console",
            Self::File => "file",
            Self::Custom => "custom",
        })
    }
}

/// `Send + Sync` so the root can fan out records from any thread.
pub trait Sink: Send + Sync {
    fn kind(&self) -> SinkKind;

    /// Per-sink threshold, checked after the root's own minimum.
    fn level(&self) -> Level;

    /// Whether a record at `level` passes this sink's filter.
    fn accepts(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Formats and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file, including rotation failures.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error>;
}
