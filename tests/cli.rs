//! Tests for CLI parsing and the arithmetic subcommand handler.
#![cfg(feature = "cli")]

use calclog::cli::{Cli, Command, evaluate, logging_config};
use calclog::{CalcError, Level};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn parses_subcommand_operands() {
    let cli = Cli::try_parse_from(["calclog", "add", "1", "2"]).unwrap();
    assert_eq!(cli.command, Command::Add { a: 1.0, b: 2.0 });
    assert_eq!(evaluate(cli.command), Ok(3.0));
}

#[test]
fn negative_operands_parse_as_numbers() {
    let cli = Cli::try_parse_from(["calclog", "add", "-3", "5"]).unwrap();
    assert_eq!(cli.command, Command::Add { a: -3.0, b: 5.0 });
    assert_eq!(evaluate(cli.command), Ok(2.0));

    let cli = Cli::try_parse_from(["calclog", "multiply", "-2.5", "-4"]).unwrap();
    assert_eq!(evaluate(cli.command), Ok(10.0));
}

#[test]
fn negative_operands_with_global_flags() {
    let cli = Cli::try_parse_from(["calclog", "--no-file", "subtract", "-3", "5"]).unwrap();
    assert!(cli.no_file);
    assert_eq!(evaluate(cli.command), Ok(-8.0));
}

#[test]
fn divide_is_true_division() {
    let cli = Cli::try_parse_from(["calclog", "divide", "7", "2"]).unwrap();
    assert_eq!(evaluate(cli.command), Ok(3.5));
}

#[test]
fn divide_by_zero_is_an_error() {
    let cli = Cli::try_parse_from(["calclog", "divide", "1", "0"]).unwrap();
    assert_eq!(evaluate(cli.command), Err(CalcError::DivisionByZero));
}

#[test]
fn default_flags_enable_both_sinks_at_info() {
    let cli = Cli::try_parse_from(["calclog", "multiply", "2", "3"]).unwrap();
    let config = logging_config(&cli);

    assert_eq!(config.level, Level::Info);
    assert!(config.console);
    assert!(config.file);
    assert_eq!(config.directory, None);
}

#[test]
fn global_flags_map_onto_logging_config() {
    let cli = Cli::try_parse_from([
        "calclog",
        "add",
        "1",
        "1",
        "--level",
        "debug",
        "--no-file",
        "--log-dir",
        "/tmp/calc-logs",
    ])
    .unwrap();
    let config = logging_config(&cli);

    assert_eq!(config.level, Level::Debug);
    assert!(config.console);
    assert!(!config.file);
    assert_eq!(config.directory, Some(PathBuf::from("/tmp/calc-logs")));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["calclog", "modulo", "1", "2"]).is_err());
}
