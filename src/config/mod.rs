//! Logging setup: the [`LoggingConfig`] value and the calls that turn it into the
//! root dispatcher's pipeline.
//!
//! ```no_run
//! use calclog::{LoggingConfig, configure, get_logger};
//!
//! configure(&LoggingConfig::new().level("debug").directory("/var/log/myapp"))?;
//! get_logger("main").info("started");
//! # Ok::<(), calclog::Error>(())
//! ```

use crate::dispatcher::{self, Dispatcher, Pipeline};
use crate::fmt::{DEFAULT_MESSAGE_FORMAT, DEFAULT_TIMESTAMP_FORMAT, Formatter};
use crate::level::{IntoLevel, Level};
use crate::output::{DEFAULT_BACKUP_COUNT, DEFAULT_MAX_BYTES, RotationPolicy, dated_file_name};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// `<project-root>/logs`.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("logs")
}

/// Everything one configure call needs. Every field has a default, so an empty
/// section in an application's own config file deserializes to a working setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Root and per-sink minimum. Unknown names deserialize to `Info`.
    #[serde(deserialize_with = "crate::level::deserialize_lenient")]
    pub level: Level,
    /// Directory for `app_<date>.log`; `None` means [`default_log_dir`].
    pub directory: Option<PathBuf>,
    pub console: bool,
    pub file: bool,
    pub message_format: String,
    /// strftime template for `{timestamp}`.
    pub timestamp_format: String,
    /// Rotation threshold for the file sink.
    pub max_bytes: u64,
    /// Rotated files kept next to the active one.
    pub backup_count: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            directory: None,
            console: true,
            file: true,
            message_format: DEFAULT_MESSAGE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a [`Level`] or a name; unknown names become `Info`.
    #[must_use]
    pub fn level(mut self, level: impl IntoLevel) -> Self {
        self.level = level.into_level();
        self
    }

    /// A leading `~` expands to the home directory.
    #[must_use]
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub const fn file(mut self, enabled: bool) -> Self {
        self.file = enabled;
        self
    }

    #[must_use]
    pub fn message_format(mut self, template: impl Into<String>) -> Self {
        self.message_format = template.into();
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn max_bytes(mut self, bytes: u64) -> Self {
        self.max_bytes = bytes;
        self
    }

    #[must_use]
    pub const fn backup_count(mut self, count: usize) -> Self {
        self.backup_count = count;
        self
    }

    /// The log directory after defaulting and `~` expansion.
    ///
    /// # Errors
    /// [`crate::Error::InvalidPath`] when a `~` path is not valid UTF-8.
    pub fn resolved_directory(&self) -> Result<PathBuf, crate::Error> {
        let Some(dir) = &self.directory else {
            return Ok(default_log_dir());
        };
        if !dir.starts_with("~") {
            return Ok(dir.clone());
        }
        let raw = dir
            .to_str()
            .ok_or_else(|| crate::Error::InvalidPath(dir.display().to_string()))?;
        Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
    }

    /// `<directory>/app_<date>.log`.
    ///
    /// # Errors
    /// See [`LoggingConfig::resolved_directory`].
    pub fn log_file_path(&self, date: NaiveDate) -> Result<PathBuf, crate::Error> {
        Ok(self.resolved_directory()?.join(dated_file_name(date)))
    }

    /// The rotation settings as a policy value.
    #[must_use]
    pub const fn rotation(&self) -> RotationPolicy {
        RotationPolicy::new(self.max_bytes, self.backup_count)
    }

    /// Builds the sinks this config asks for. The file sink, if enabled, is opened
    /// here, so its directory and today's file exist once this returns.
    ///
    /// # Errors
    /// Filesystem errors from creating the directory or opening the file.
    pub fn build_pipeline(&self) -> Result<Pipeline, crate::Error> {
        let formatter = Formatter::new(&self.message_format, self.timestamp_format.as_str());
        let mut builder = Pipeline::builder().level(self.level);

        if self.console {
            builder = builder.console().formatter(formatter.clone()).done();
        }

        if self.file {
            let path = self.log_file_path(Local::now().date_naive())?;
            builder = builder
                .file(path)
                .formatter(formatter)
                .rotation(self.rotation())
                .done()?;
        }

        Ok(builder.build())
    }
}

/// Installs `config` on the root dispatcher, replacing whatever was there.
///
/// # Errors
/// Filesystem errors from the file sink. The previous pipeline stays installed.
pub fn configure(config: &LoggingConfig) -> Result<(), crate::Error> {
    configure_dispatcher(dispatcher::root(), config)
}

/// Installs `config` on a specific dispatcher.
///
/// # Errors
/// Filesystem errors from the file sink. The previous pipeline stays installed.
pub fn configure_dispatcher(
    dispatcher: &Dispatcher,
    config: &LoggingConfig,
) -> Result<(), crate::Error> {
    let pipeline = config.build_pipeline()?;
    dispatcher.install(pipeline);
    Ok(())
}

/// Six-argument form of [`configure`].
///
/// `level` takes a [`Level`] or a name (case-insensitive, unknown names become
/// `Info`). `directory` defaults to [`default_log_dir`]. Pass
/// [`DEFAULT_MESSAGE_FORMAT`] and [`DEFAULT_TIMESTAMP_FORMAT`] for the standard layout.
///
/// # Errors
/// Filesystem errors when the file sink is enabled.
pub fn setup_logging(
    level: impl IntoLevel,
    directory: Option<&Path>,
    console_enabled: bool,
    file_enabled: bool,
    message_format: &str,
    timestamp_format: &str,
) -> Result<(), crate::Error> {
    let mut config = LoggingConfig::new()
        .level(level)
        .console(console_enabled)
        .file(file_enabled)
        .message_format(message_format)
        .timestamp_format(timestamp_format);
    if let Some(dir) = directory {
        config = config.directory(dir);
    }
    configure(&config)
}
