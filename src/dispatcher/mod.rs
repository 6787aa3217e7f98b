//! The root dispatcher: one minimum level plus an ordered set of sinks, shared by every
//! named logger.
//!
//! Lifecycle: obtain the process-wide instance with [`root`], configure it once at
//! startup, and emit from anywhere afterwards. Reconfiguring replaces the whole
//! pipeline, so sinks never accumulate. Configuration calls must not race each other.

mod builder;

pub use builder::{ConsoleBuilder, FileBuilder, PipelineBuilder};

use crate::level::Level;
use crate::logger::Logger;
use crate::output::{LogRecord, Sink, SinkKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock, RwLockReadGuard};

static ROOT: OnceLock<Dispatcher> = OnceLock::new();

/// The process-wide dispatcher, created on first access with no sinks and a
/// [`Level::Warning`] minimum.
pub fn root() -> &'static Dispatcher {
    ROOT.get_or_init(Dispatcher::new)
}

/// Minimum level plus sinks, swapped in as a unit by [`Dispatcher::install`].
pub struct Pipeline {
    min_level: Level,
    sinks: Vec<Box<dyn Sink>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            min_level: Level::Warning,
            sinks: Vec::new(),
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("min_level", &self.min_level)
            .field("sinks", &self.sink_kinds())
            .finish()
    }
}

impl Pipeline {
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.sinks.iter().map(|s| s.kind()).collect()
    }

    fn flush_all(&self) -> Result<(), crate::Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

pub(crate) struct Shared {
    pipeline: RwLock<Pipeline>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Shared {
    fn pipeline(&self) -> RwLockReadGuard<'_, Pipeline> {
        self.pipeline.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.pipeline().min_level
    }

    /// Fans a record out to every sink whose own filter accepts it.
    pub(crate) fn emit(&self, record: &LogRecord) {
        let pipeline = self.pipeline();
        if record.level < pipeline.min_level {
            return;
        }

        for sink in pipeline.sinks.iter().filter(|s| s.accepts(record.level)) {
            if let Err(e) = sink.write(record) {
                eprintln!("calclog: {} sink failed to write record: {e}", sink.kind());
            }
        }
    }
}

/// Cheap-to-clone handle on shared dispatcher state.
#[derive(Clone)]
pub struct Dispatcher {
    shared: Arc<Shared>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pipeline", &*self.shared.pipeline())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// A standalone dispatcher, independent of [`root`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                pipeline: RwLock::new(Pipeline::default()),
                loggers: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Replaces the minimum level and every sink. The previous sinks are flushed and
    /// dropped, which closes any files they held.
    pub fn install(&self, pipeline: Pipeline) {
        let previous = {
            let mut guard = self
                .shared
                .pipeline
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, pipeline)
        };

        if let Err(e) = previous.flush_all() {
            eprintln!("calclog: failed to flush replaced sinks: {e}");
        }
    }

    /// Detaches every sink and restores the initial [`Level::Warning`] minimum.
    pub fn shutdown(&self) {
        self.install(Pipeline::default());
    }

    /// # Errors
    /// The first I/O error reported by a sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.shared.pipeline().flush_all()
    }

    #[must_use]
    pub fn min_level(&self) -> Level {
        self.shared.pipeline().min_level
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.shared.pipeline().sink_count()
    }

    /// Kinds of the attached sinks, in attachment order.
    #[must_use]
    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.shared.pipeline().sink_kinds()
    }

    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        self.shared.is_enabled_for(level)
    }

    /// The logger registered under `name`, created on first request. The empty name
    /// is the root logger, `"root"`.
    #[must_use]
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        let name = if name.is_empty() { "root" } else { name };
        let mut loggers = self
            .shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name, Arc::downgrade(&self.shared)))),
        )
    }
}
