//! `calclog` - run one arithmetic operation with logging set up from the command line.
//!
//! Usage:
//!   calclog add <A> <B>         Print A + B
//!   calclog subtract <A> <B>    Print A - B
//!   calclog multiply <A> <B>    Print A * B
//!   calclog divide <A> <B>      Print A / B
//!
//! Global flags: --level <LEVEL>, --log-dir <DIR>, --no-console, --no-file

use calclog::cli::{Cli, cmd_calc, logging_config};
use calclog::{configure, get_logger};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging must be in place before the command runs so its records land in the sinks
    if let Err(e) = configure(&logging_config(&cli)) {
        eprintln!("Error setting up logging: {e}");
        return ExitCode::FAILURE;
    }

    let logger = get_logger("calclog");
    let code = cmd_calc(cli.command, &logger);

    if let Err(e) = calclog::root().flush() {
        eprintln!("Error flushing logs: {e}");
    }
    code
}
