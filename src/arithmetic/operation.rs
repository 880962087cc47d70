//! The closed set of supported operations.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::ArithmeticError;

/// A binary arithmetic operation, selected by its lowercase name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Evaluate this operation on `lhs` and `rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operation::Add => super::add(lhs, rhs),
            Operation::Subtract => super::subtract(lhs, rhs),
            Operation::Multiply => super::multiply(lhs, rhs),
            Operation::Divide => super::divide(lhs, rhs),
        }
    }

    /// One-line description shown in the usage text.
    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Add two numbers",
            Operation::Subtract => "Subtract second number from first",
            Operation::Multiply => "Multiply two numbers",
            Operation::Divide => "Divide first number by second",
        }
    }

    /// Names of every operation, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::iter().map(<&'static str>::from)
    }
}
