//! Severity levels that gate which records reach the root and each sink.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the dispatcher can compare a record's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Detailed diagnostics, normally off outside development.
    Debug = 10,
    /// Normal operational milestones.
    #[default]
    Info = 20,
    /// Something unexpected happened but work continues.
    Warning = 30,
    /// An operation failed.
    Error = 40,
    /// The process may not be able to continue.
    Critical = 50,
}

impl Level {
    /// Upper-case name, as it appears in formatted lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Numeric severity; higher is more severe.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Every level in ascending severity.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }

    /// Resolves a level name, falling back to [`Level::Info`] for anything unrecognised.
    ///
    /// ```
    /// use calclog::Level;
    ///
    /// assert_eq!(Level::lenient("debug"), Level::Debug);
    /// assert_eq!(Level::lenient("verbose"), Level::Info);
    /// ```
    #[must_use]
    pub fn lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Info)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers that want strict validation can reject unknown names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Anything `configure` accepts as a level: a resolved [`Level`] or a name.
///
/// Names go through [`Level::lenient`], so a typo never fails setup.
pub trait IntoLevel {
    fn into_level(self) -> Level;
}

impl IntoLevel for Level {
    fn into_level(self) -> Level {
        self
    }
}

impl IntoLevel for &str {
    fn into_level(self) -> Level {
        Level::lenient(self)
    }
}

impl IntoLevel for String {
    fn into_level(self) -> Level {
        Level::lenient(&self)
    }
}

impl IntoLevel for &String {
    fn into_level(self) -> Level {
        Level::lenient(self)
    }
}

/// Serde hook for config structs: same leniency as [`Level::lenient`].
///
/// # Errors
/// Only when the input is not a string at all.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(Level::lenient(&name))
}
