//! Stepwise assembly of a [`Pipeline`]: pick the root level, then add console and file
//! sinks through their own sub-builders.

use super::Pipeline;
use crate::fmt::Formatter;
use crate::level::Level;
use crate::output::{ConsoleSink, RotatingFileSink, RotationPolicy, Sink};
use std::path::PathBuf;

/// Builds a [`Pipeline`]. Sub-builders inherit the root level unless told otherwise.
#[derive(Default)]
pub struct PipelineBuilder {
    min_level: Level,
    sinks: Vec<Box<dyn Sink>>,
}

impl PipelineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            sinks: Vec::new(),
        }
    }

    /// Minimum level checked before any sink sees a record.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            level: self.min_level,
            formatter: Formatter::default(),
            parent: self,
        }
    }

    /// The file path is required before [`FileBuilder::done`].
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            level: self.min_level,
            formatter: Formatter::default(),
            policy: RotationPolicy::default(),
            path: path.into(),
            parent: self,
        }
    }

    /// Attaches an application-provided sink.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn build(self) -> Pipeline {
        Pipeline {
            min_level: self.min_level,
            sinks: self.sinks,
        }
    }
}

pub struct ConsoleBuilder {
    parent: PipelineBuilder,
    level: Level,
    formatter: Formatter,
}

impl ConsoleBuilder {
    /// Overrides the inherited root level for this sink only.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn done(mut self) -> PipelineBuilder {
        self.parent
            .sinks
            .push(Box::new(ConsoleSink::new(self.level, self.formatter)));
        self.parent
    }
}

pub struct FileBuilder {
    parent: PipelineBuilder,
    path: PathBuf,
    level: Level,
    formatter: Formatter,
    policy: RotationPolicy,
}

impl FileBuilder {
    /// Overrides the inherited root level for this sink only.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, policy: RotationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Opens the file (creating its directory) and attaches the sink.
    ///
    /// # Errors
    /// Filesystem errors from creating the directory or opening the file.
    pub fn done(mut self) -> Result<PipelineBuilder, crate::Error> {
        let sink = RotatingFileSink::open(self.path, self.level, self.formatter, self.policy)?;
        self.parent.sinks.push(Box::new(sink));
        Ok(self.parent)
    }
}
