//! Subcommand handlers.

mod calc;

pub use calc::{cmd_calc, evaluate};
