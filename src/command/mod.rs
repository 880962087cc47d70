//! Token-level entry point: turns `<operation> <num1> <num2>` into a result.
//!
//! This is the boundary where text becomes `f64`. Everything past
//! [`parse_operand`] works on typed values only.

pub mod usage;

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::arithmetic::{ArithmeticError, Operation};
use crate::models::{Calculation, Outcome};

pub use usage::usage_text;

/// Tokens that request the usage text instead of a calculation.
pub const HELP_FLAGS: [&str; 2] = ["--help", "-h"];

/// Number of operand tokens every operation takes.
pub const OPERAND_COUNT: usize = 2;

/// Errors raised while turning tokens into a calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Operation {operation} requires exactly 2 numbers, got {given}")]
    WrongArgumentCount { operation: String, given: usize },

    #[error("Unknown option: {option} (options must come before the operation)")]
    UnknownOption { option: String },

    #[error("Unknown operation: {name} (expected one of: {})", expected_operations())]
    UnknownOperation { name: String },

    #[error("Invalid number format provided: '{token}'")]
    InvalidNumber { token: String },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

fn expected_operations() -> String {
    Operation::names().collect::<Vec<_>>().join(", ")
}

/// Broad category of a [`CommandError`], used for exit codes and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The tokens themselves are malformed (count, operation name, number syntax).
    InvalidInput,
    /// The operands parsed but the arithmetic rejected them.
    InvalidValue,
    /// The divisor was zero.
    DivisionByZero,
}

impl ErrorKind {
    /// Process exit code for this category. Input errors use `2`, the same
    /// code clap uses for its own usage errors.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidInput => 2,
            ErrorKind::InvalidValue | ErrorKind::DivisionByZero => 1,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid_input"),
            ErrorKind::InvalidValue => write!(f, "invalid_value"),
            ErrorKind::DivisionByZero => write!(f, "division_by_zero"),
        }
    }
}

impl CommandError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::WrongArgumentCount { .. }
            | CommandError::UnknownOption { .. }
            | CommandError::UnknownOperation { .. }
            | CommandError::InvalidNumber { .. } => ErrorKind::InvalidInput,
            CommandError::Arithmetic(ArithmeticError::DivisionByZero) => ErrorKind::DivisionByZero,
            CommandError::Arithmetic(
                ArithmeticError::NotANumber { .. } | ArithmeticError::UndefinedResult { .. },
            ) => ErrorKind::InvalidValue,
        }
    }
}

/// Evaluate one invocation from its argument tokens.
///
/// An empty token list, or any `--help` / `-h` token, yields
/// [`Outcome::Usage`]. A leading token that looks like an option but is not
/// a number is an unrecognised option. Otherwise the first token names the
/// operation and exactly two operand tokens must follow.
pub fn calculate<S: AsRef<str>>(tokens: &[S]) -> Result<Outcome, CommandError> {
    if tokens.is_empty() || tokens.iter().any(|t| HELP_FLAGS.contains(&t.as_ref())) {
        debug!(tokens = tokens.len(), "usage requested");
        return Ok(Outcome::Usage);
    }

    let name = tokens[0].as_ref();
    if name.starts_with('-') && parse_operand(name).is_err() {
        return Err(CommandError::UnknownOption {
            option: name.to_string(),
        });
    }
    let operands = &tokens[1..];
    if operands.len() != OPERAND_COUNT {
        return Err(CommandError::WrongArgumentCount {
            operation: name.to_string(),
            given: operands.len(),
        });
    }

    let operation: Operation = name.parse().map_err(|_| CommandError::UnknownOperation {
        name: name.to_string(),
    })?;
    let lhs = parse_operand(operands[0].as_ref())?;
    let rhs = parse_operand(operands[1].as_ref())?;

    debug!(%operation, lhs, rhs, "dispatching");
    let result = operation.apply(lhs, rhs)?;

    Ok(Outcome::Calculated(Calculation {
        operation,
        lhs,
        rhs,
        result,
    }))
}

/// Parse one operand token as `f64`.
///
/// Surrounding whitespace is ignored. Accepts decimal and exponent syntax
/// plus `inf` / `infinity` in any case. `nan` parses here and is rejected
/// later by the arithmetic layer.
///
/// Digit separators are not accepted: `1_000` and `1,000` are invalid.
pub fn parse_operand(token: &str) -> Result<f64, CommandError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(CommandError::InvalidNumber {
            token: token.to_string(),
        });
    }
    trimmed.parse::<f64>().map_err(|_| CommandError::InvalidNumber {
        token: token.to_string(),
    })
}
