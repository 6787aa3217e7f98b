//! Standard-output sink.

use crate::fmt::Formatter;
use crate::level::Level;

use super::{LogRecord, Sink, SinkKind};
use std::io::{self, Write};

/// Writes every accepted record to stdout, one line each.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    level: Level,
    formatter: Formatter,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(level: Level, formatter: Formatter) -> Self {
        Self { level, formatter }
    }

    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn level(&self) -> Level {
        self.level
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let line = self.formatter.format(record);
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
