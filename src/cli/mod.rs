//! Command-line front end for the `calclog` binary.
//!
//! Parsing uses Clap; each arithmetic operation is its own subcommand and the logging
//! switches are global flags.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// calclog - arithmetic with logged results.
#[derive(Parser)]
#[command(name = "calclog", version, about = "Arithmetic with logged results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Minimum log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub level: LogLevel,

    /// Directory for app_<date>.log (defaults to <project-root>/logs)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Do not log to stdout
    #[arg(long, global = true)]
    pub no_console: bool,

    /// Do not log to a file
    #[arg(long, global = true)]
    pub no_file: bool,
}

/// CLI subcommands. Operands may be negative (`calclog add -3 5`).
#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Print A + B.
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print A - B.
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print A * B.
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print A / B; fails when B is zero.
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

pub use commands::{cmd_calc, evaluate};
pub use util::logging_config;
