//! `calclog` - four-function arithmetic and a process-wide logging setup.
//!
//! The logging half wires a root dispatcher with an optional stdout sink and an
//! optional size-rotated file sink (`app_<YYYY-MM-DD>.log`, 10 MiB, 30 backups),
//! hands out named loggers, and lets any type carry its own logger through
//! [`HasLogger`].
//!
//! # Example
//!
//! ```no_run
//! use calclog::{HasLogger, LoggingConfig, configure, divide, get_logger};
//!
//! configure(&LoggingConfig::new().level("debug").file(false))?;
//!
//! let log = get_logger("main");
//! match divide(7, 2) {
//!     Ok(q) => calclog::info!(log, "7 / 2 = {q}"),
//!     Err(e) => calclog::error!(log, "{e}"),
//! }
//!
//! struct Job;
//! impl HasLogger for Job {}
//! Job.logger().debug("job ready");
//! # Ok::<(), calclog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `calclog` demo binary

pub mod calculator;
pub mod config;
pub mod dispatcher;
mod error;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use calculator::{CalcError, Operand, add, divide, multiply, subtract};
pub use config::{LoggingConfig, configure, configure_dispatcher, default_log_dir, setup_logging};
pub use dispatcher::{Dispatcher, Pipeline, root};
pub use error::Error;
pub use fmt::{DEFAULT_MESSAGE_FORMAT, DEFAULT_TIMESTAMP_FORMAT, Formatter};
pub use level::{IntoLevel, Level};
pub use logger::{HasLogger, Logger, get_logger, logger_name_of};
pub use output::{ConsoleSink, LogRecord, RotatingFileSink, RotationPolicy, Sink, SinkKind};
