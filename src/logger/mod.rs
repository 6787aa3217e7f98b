//! Named logger handles. A handle stores only its name and a link to its dispatcher,
//! so the level and sinks it uses are the ones installed at emission time.

mod has_logger;
mod macros;

pub use has_logger::{HasLogger, logger_name_of};

use crate::dispatcher::{self, Shared};
use crate::level::Level;
use crate::output::LogRecord;
use chrono::Local;
use std::fmt;
use std::panic::Location;
use std::sync::{Arc, Weak};

/// Function name recorded when the call site is known only by file and line.
pub const UNKNOWN_FUNCTION: &str = "(unknown function)";

/// The registered logger for `name` on the root dispatcher.
///
/// Repeated calls with the same name return the same handle:
///
/// ```
/// use std::sync::Arc;
///
/// let a = calclog::get_logger("net");
/// let b = calclog::get_logger("net");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[must_use]
pub fn get_logger(name: &str) -> Arc<Logger> {
    dispatcher::root().logger(name)
}

/// Where a record was emitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub func: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl Origin {
    #[must_use]
    pub const fn new(func: &'static str, file: &'static str, line: u32) -> Self {
        Self { func, file, line }
    }

    /// File and line of the caller; the function name is [`UNKNOWN_FUNCTION`].
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(UNKNOWN_FUNCTION, location.file(), location.line())
    }
}

/// A named entry point into a dispatcher. Obtain one with [`get_logger`] or
/// [`crate::Dispatcher::logger`].
pub struct Logger {
    name: String,
    root: Weak<Shared>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

impl Logger {
    pub(crate) fn new(name: &str, root: Weak<Shared>) -> Self {
        Self {
            name: name.to_string(),
            root,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a record at `level` would get past the dispatcher's minimum right now.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        self.root
            .upgrade()
            .is_some_and(|root| root.is_enabled_for(level))
    }

    /// Emits with an explicit origin. The logging macros call this.
    pub fn log_at(&self, level: Level, origin: Origin, msg: &str) {
        // Dispatcher gone: nothing left to write to
        let Some(root) = self.root.upgrade() else {
            return;
        };
        if !root.is_enabled_for(level) {
            return;
        }

        let record = LogRecord {
            time: Local::now(),
            level,
            name: self.name.clone(),
            func: origin.func,
            file: origin.file,
            line: origin.line,
            message: msg.to_string(),
        };
        root.emit(&record);
    }

    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) {
        self.log_at(level, Origin::caller(), msg);
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log_at(Level::Debug, Origin::caller(), msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log_at(Level::Info, Origin::caller(), msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log_at(Level::Warning, Origin::caller(), msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log_at(Level::Error, Origin::caller(), msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log_at(Level::Critical, Origin::caller(), msg);
    }
}
