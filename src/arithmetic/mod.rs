//! Arithmetic core: the four operations and their validation rules.
//!
//! Operands are plain `f64`. Each operation rejects NaN operands, `divide`
//! additionally rejects a zero divisor, and a NaN result (such as
//! `inf - inf`) is reported as undefined. Results that exceed the `f64`
//! range saturate to infinity instead of failing.

mod operation;

pub use operation::Operation;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which operand a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandPosition {
    First,
    Second,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandPosition::First => write!(f, "first"),
            OperandPosition::Second => write!(f, "second"),
        }
    }
}

/// Errors raised while evaluating an operation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArithmeticError {
    #[error("{position} operand is not a number (NaN)")]
    NotANumber { position: OperandPosition },

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("{operation} produced an undefined result (NaN)")]
    UndefinedResult { operation: Operation },
}

/// Add `b` to `a`.
pub fn add(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    check_operands(a, b)?;
    check_result(Operation::Add, a + b)
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    check_operands(a, b)?;
    check_result(Operation::Subtract, a - b)
}

/// Multiply `a` by `b`.
///
/// The sign of a zero product follows IEEE-754, so `multiply(-5.0, 0.0)`
/// is `-0.0` (which still compares equal to `0.0`).
pub fn multiply(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    check_operands(a, b)?;
    check_result(Operation::Multiply, a * b)
}

/// Divide `a` by `b`.
///
/// Both `0.0` and `-0.0` divisors are rejected, whatever the dividend.
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    check_operands(a, b)?;
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    check_result(Operation::Divide, a / b)
}

fn check_operands(a: f64, b: f64) -> Result<(), ArithmeticError> {
    if a.is_nan() {
        return Err(ArithmeticError::NotANumber {
            position: OperandPosition::First,
        });
    }
    if b.is_nan() {
        return Err(ArithmeticError::NotANumber {
            position: OperandPosition::Second,
        });
    }
    Ok(())
}

// Overflow is not checked: IEEE arithmetic already saturates to +/-inf.
fn check_result(operation: Operation, value: f64) -> Result<f64, ArithmeticError> {
    if value.is_nan() {
        tracing::debug!(%operation, "operation produced NaN");
        return Err(ArithmeticError::UndefinedResult { operation });
    }
    Ok(value)
}
