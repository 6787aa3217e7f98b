//! Runs one arithmetic subcommand, prints the result, and logs what happened.

use crate::calculator::{self, CalcError};
use crate::cli::Command;
use crate::logger::Logger;
use std::process::ExitCode;

/// Evaluates `command`; division by zero is logged as an error and fails the process.
#[must_use]
pub fn cmd_calc(command: Command, logger: &Logger) -> ExitCode {
    let (symbol, a, b) = describe(command);
    crate::debug!(logger, "evaluating {a} {symbol} {b}");

    match evaluate(command) {
        Ok(value) => {
            crate::info!(logger, "{a} {symbol} {b} = {value}");
            println!("{value:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            crate::error!(logger, "{a} {symbol} {b} failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// The arithmetic behind each subcommand.
///
/// # Errors
/// [`CalcError::DivisionByZero`] for `divide` with a zero divisor.
pub fn evaluate(command: Command) -> Result<f64, CalcError> {
    match command {
        Command::Add { a, b } => Ok(calculator::add(a, b)),
        Command::Subtract { a, b } => Ok(calculator::subtract(a, b)),
        Command::Multiply { a, b } => Ok(calculator::multiply(a, b)),
        Command::Divide { a, b } => calculator::divide(a, b),
    }
}

const fn describe(command: Command) -> (&'static str, f64, f64) {
    match command {
        Command::Add { a, b } => ("+", a, b),
        Command::Subtract { a, b } => ("-", a, b),
        Command::Multiply { a, b } => ("*", a, b),
        Command::Divide { a, b } => ("/", a, b),
    }
}
