//! Error types for arithmetic operations.

use std::fmt;

/// Exact text carried by [`CalcError::DivisionByZero`]; callers match on it.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "0で割ることはできません";

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The divisor was zero.
    DivisionByZero,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str(DIVISION_BY_ZERO_MESSAGE),
        }
    }
}

impl std::error::Error for CalcError {}
