//! Renders a [`LogRecord`] into one line using a message template and a strftime template.

use super::{DEFAULT_MESSAGE_FORMAT, DEFAULT_TIMESTAMP_FORMAT, FormatTemplate, FormatValues};
use crate::output::LogRecord;
use chrono::Timelike;
use std::fmt::Write;

/// Message template plus timestamp template, shared by every sink of one configure call.
#[derive(Debug, Clone)]
pub struct Formatter {
    template: FormatTemplate,
    timestamp_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_FORMAT, DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl Formatter {
    #[must_use]
    pub fn new(message_format: &str, timestamp_format: impl Into<String>) -> Self {
        Self {
            template: FormatTemplate::parse(message_format),
            timestamp_format: timestamp_format.into(),
        }
    }

    #[must_use]
    pub const fn template(&self) -> &FormatTemplate {
        &self.template
    }

    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Formats one record, without a trailing newline.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        // chrono reports a bad strftime item as a fmt error; fall back to the raw template text
        let mut timestamp = String::new();
        if write!(timestamp, "{}", record.time.format(&self.timestamp_format)).is_err() {
            timestamp.clone_from(&self.timestamp_format);
        }

        // Leap seconds report nanoseconds past 1_000_000_000
        let millis = (record.time.nanosecond() / 1_000_000).min(999);

        let values = FormatValues::new()
            .timestamp(timestamp)
            .msecs(millis)
            .level(record.level.as_str())
            .name(&record.name)
            .func(record.func)
            .file(record.file)
            .line(record.line)
            .msg(&record.message);

        self.template.render(&values)
    }
}
