//! Unified error type for logging setup and sink I/O.

use std::path::PathBuf;

/// Error type for calclog logging operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing, flushing, or rotating a sink.
    Io(std::io::Error),
    /// The log directory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The log file could not be opened for appending.
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A configured path could not be expanded.
    InvalidPath(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CreateDir { path, source } => {
                write!(f, "cannot create log directory {}: {source}", path.display())
            }
            Self::OpenFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::CreateDir { source: e, .. } | Self::OpenFile { source: e, .. } => {
                Some(e)
            }
            Self::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
