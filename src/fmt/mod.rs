//! Line layout: the template parser and the record formatter built on it.

mod format;
mod formatter;

pub use format::{Alignment, FormatSegment, FormatTemplate, FormatValues, Placeholder};
pub use formatter::Formatter;

/// Timestamp with milliseconds, padded level, logger name, call site, message.
pub const DEFAULT_MESSAGE_FORMAT: &str =
    "{timestamp}.{msecs} | {level:<8} | {name}:{func}:{line} | {msg}";

/// strftime template for `{timestamp}`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
