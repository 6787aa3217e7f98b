//! Tests for configuring the process-wide root dispatcher.
//!
//! Every test here mutates global state, so they run serially and reset the root
//! when they finish.

use calclog::{
    DEFAULT_MESSAGE_FORMAT, DEFAULT_TIMESTAMP_FORMAT, Level, LoggingConfig, SinkKind, configure,
    default_log_dir, get_logger, root, setup_logging,
};
use calclog::output::dated_file_name;
use chrono::Local;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Detaches every sink on drop so temp directories can be removed and later tests start clean.
struct ResetRoot;

impl Drop for ResetRoot {
    fn drop(&mut self) {
        root().shutdown();
    }
}

fn log_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("app_") && n.ends_with(".log"))
        })
        .collect()
}

#[test]
#[serial]
fn setup_logging_creates_console_handler() {
    let _reset = ResetRoot;
    setup_logging(
        Level::Info,
        None,
        true,
        false,
        DEFAULT_MESSAGE_FORMAT,
        DEFAULT_TIMESTAMP_FORMAT,
    )
    .unwrap();

    assert_eq!(root().sink_count(), 1);
    assert_eq!(root().sink_kinds(), vec![SinkKind::Console]);
}

#[test]
#[serial]
fn setup_logging_creates_file_handler() {
    let tmp_dir = TempDir::new().unwrap();
    let _reset = ResetRoot;
    configure(&LoggingConfig::new().console(false).directory(tmp_dir.path())).unwrap();

    assert_eq!(root().sink_kinds(), vec![SinkKind::File]);
    assert_eq!(log_files(tmp_dir.path()).len(), 1);
}

#[test]
#[serial]
fn setup_logging_with_both_handlers() {
    let tmp_dir = TempDir::new().unwrap();
    let _reset = ResetRoot;
    setup_logging(
        "info",
        Some(tmp_dir.path()),
        true,
        true,
        DEFAULT_MESSAGE_FORMAT,
        DEFAULT_TIMESTAMP_FORMAT,
    )
    .unwrap();

    assert_eq!(root().sink_count(), 2);
    assert_eq!(root().sink_kinds(), vec![SinkKind::Console, SinkKind::File]);

    let files = log_files(tmp_dir.path());
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, dated_file_name(Local::now().date_naive()));
}

#[test]
#[serial]
fn setup_logging_with_no_handlers() {
    let _reset = ResetRoot;
    configure(&LoggingConfig::new().console(false).file(false)).unwrap();

    assert_eq!(root().sink_count(), 0);
    get_logger("silent").critical("dropped without a sink");
}

#[test]
#[serial]
fn setup_logging_sets_log_level() {
    let _reset = ResetRoot;
    configure(&LoggingConfig::new().level(Level::Debug).file(false)).unwrap();

    assert_eq!(root().min_level(), Level::Debug);
}

#[test]
#[serial]
fn setup_logging_accepts_string_level() {
    let _reset = ResetRoot;
    configure(&LoggingConfig::new().level("DEBUG").file(false)).unwrap();
    assert_eq!(root().min_level(), Level::Debug);

    configure(&LoggingConfig::new().level("critical").file(false)).unwrap();
    assert_eq!(root().min_level(), Level::Critical);
}

#[test]
#[serial]
fn setup_logging_unknown_level_falls_back_to_info() {
    let _reset = ResetRoot;
    configure(&LoggingConfig::new().level("bogus").file(false)).unwrap();

    assert_eq!(root().min_level(), Level::Info);
}

#[test]
#[serial]
fn setup_logging_creates_log_directory() {
    let tmp_dir = TempDir::new().unwrap();
    let log_dir = tmp_dir.path().join("nested").join("logs");
    let _reset = ResetRoot;
    configure(&LoggingConfig::new().console(false).directory(&log_dir)).unwrap();

    assert!(log_dir.is_dir());
    assert_eq!(log_files(&log_dir).len(), 1);
}

#[test]
#[serial]
fn repeated_setup_never_accumulates_handlers() {
    let tmp_dir = TempDir::new().unwrap();
    let _reset = ResetRoot;
    let both = LoggingConfig::new().directory(tmp_dir.path());

    configure(&both).unwrap();
    configure(&both).unwrap();
    assert_eq!(root().sink_count(), 2);

    configure(&both.clone().file(false)).unwrap();
    assert_eq!(root().sink_count(), 1);

    configure(&both.clone().console(false).file(false)).unwrap();
    assert_eq!(root().sink_count(), 0);
}

#[test]
#[serial]
fn records_reach_the_log_file() {
    let tmp_dir = TempDir::new().unwrap();
    let _reset = ResetRoot;
    configure(
        &LoggingConfig::new()
            .console(false)
            .directory(tmp_dir.path())
            .message_format("{level}:{name}:{msg}"),
    )
    .unwrap();

    let logger = get_logger("setup.test");
    logger.debug("below the level");
    logger.warning("disk low");
    root().flush().unwrap();

    let files = log_files(tmp_dir.path());
    let content = fs::read_to_string(&files[0]).unwrap();
    assert_eq!(content, "WARNING:setup.test:disk low\n");
}

#[test]
#[serial]
fn repeated_setup_writes_each_line_once() {
    let tmp_dir = TempDir::new().unwrap();
    let _reset = ResetRoot;
    let config = LoggingConfig::new()
        .console(false)
        .directory(tmp_dir.path())
        .message_format("{msg}");

    configure(&config).unwrap();
    configure(&config).unwrap();
    get_logger("dup").info("once");
    root().flush().unwrap();

    let files = log_files(tmp_dir.path());
    assert_eq!(fs::read_to_string(&files[0]).unwrap(), "once\n");
}

#[test]
#[serial]
fn failed_setup_keeps_previous_pipeline() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "file, not directory").unwrap();
    let _reset = ResetRoot;

    configure(&LoggingConfig::new().file(false)).unwrap();
    let err = configure(&LoggingConfig::new().directory(blocker.join("logs"))).unwrap_err();

    assert!(matches!(err, calclog::Error::CreateDir { .. }));
    assert_eq!(root().sink_kinds(), vec![SinkKind::Console]);
}

#[test]
fn default_directory_is_logs_under_project_root() {
    let dir = default_log_dir();
    assert!(dir.ends_with("logs"));
    assert_eq!(dir.parent(), Some(Path::new(env!("CARGO_MANIFEST_DIR"))));
}
