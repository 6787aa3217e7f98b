//! Size-rotated file sink.
//!
//! The active file is `<dir>/app_<YYYY-MM-DD>.log`. When the next line would take
//! it to the size threshold, the file is renamed to `<name>.1`, older siblings
//! shift up one (`.1` -> `.2`, ...), whatever would become `.N+1` is deleted,
//! and a fresh active file is opened.

use crate::fmt::Formatter;
use crate::level::Level;

use super::{LogRecord, Sink, SinkKind};
use chrono::NaiveDate;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated siblings kept next to the active file.
pub const DEFAULT_BACKUP_COUNT: usize = 30;

/// `app_<YYYY-MM-DD>.log`.
#[must_use]
pub fn dated_file_name(date: NaiveDate) -> String {
    format!("app_{}.log", date.format("%Y-%m-%d"))
}

/// When to rotate and how much history to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the active file would reach this many bytes. Zero disables rotation.
    pub max_bytes: u64,
    /// Number of rotated siblings kept. Zero also disables rotation.
    pub backup_count: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl RotationPolicy {
    #[must_use]
    pub const fn new(max_bytes: u64, backup_count: usize) -> Self {
        Self {
            max_bytes,
            backup_count,
        }
    }
}

/// `None` between closing the old file and reopening a fresh one during rotation.
#[derive(Debug)]
struct ActiveFile {
    file: Option<File>,
    size: u64,
}

/// Appends formatted records to a file and rotates it by size.
#[derive(Debug)]
pub struct RotatingFileSink {
    path: PathBuf,
    level: Level,
    formatter: Formatter,
    policy: RotationPolicy,
    active: Mutex<ActiveFile>,
}

impl RotatingFileSink {
    /// Creates the parent directory if needed and opens `path` for appending.
    ///
    /// # Errors
    /// [`crate::Error::CreateDir`] or [`crate::Error::OpenFile`] when the filesystem refuses.
    pub fn open(
        path: impl Into<PathBuf>,
        level: Level,
        formatter: Formatter,
        policy: RotationPolicy,
    ) -> Result<Self, crate::Error> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| crate::Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = open_append(&path)?;
        let size = file.metadata().map(|m| m.len())?;

        Ok(Self {
            path,
            level,
            formatter,
            policy,
            active: Mutex::new(ActiveFile {
                file: Some(file),
                size,
            }),
        })
    }

    /// Path of the active file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn policy(&self) -> RotationPolicy {
        self.policy
    }

    /// `<active>.<index>`; index 1 is the most recent rotation.
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn lock(&self) -> MutexGuard<'_, ActiveFile> {
        // A panic mid-write leaves the byte count at worst slightly stale
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    const fn should_rotate(&self, current: u64, incoming: u64) -> bool {
        self.policy.max_bytes > 0
            && self.policy.backup_count > 0
            && current > 0
            && current.saturating_add(incoming) >= self.policy.max_bytes
    }

    fn rotate(&self, active: &mut ActiveFile) -> Result<(), crate::Error> {
        // Close before renaming
        if let Some(mut file) = active.file.take() {
            file.flush()?;
        }

        for index in (1..self.policy.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                let dst = self.backup_path(index + 1);
                if dst.exists() {
                    fs::remove_file(&dst)?;
                }
                fs::rename(&src, &dst)?;
            }
        }

        let newest = self.backup_path(1);
        if newest.exists() {
            fs::remove_file(&newest)?;
        }
        if self.path.exists() {
            fs::rename(&self.path, &newest)?;
        }

        active.file = Some(open_append(&self.path)?);
        active.size = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, crate::Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| crate::Error::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

impl Sink for RotatingFileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn level(&self) -> Level {
        self.level
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        let incoming = line.len() as u64;

        let mut guard = self.lock();
        let active = &mut *guard;

        if self.should_rotate(active.size, incoming) {
            self.rotate(active)?;
        }

        // A failed reopen during an earlier rotation is retried here
        if active.file.is_none() {
            active.file = Some(open_append(&self.path)?);
        }

        if let Some(file) = active.file.as_mut() {
            file.write_all(line.as_bytes())?;
            active.size += incoming;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut active = self.lock();
        if let Some(file) = active.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
