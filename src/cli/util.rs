//! Utility functions for the CLI.

use super::Cli;
use crate::config::LoggingConfig;

/// Maps the global flags onto a [`LoggingConfig`].
#[must_use]
pub fn logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::new()
        .level(crate::level::Level::from(cli.level))
        .console(!cli.no_console)
        .file(!cli.no_file);
    if let Some(dir) = &cli.log_dir {
        config = config.directory(dir);
    }
    config
}
