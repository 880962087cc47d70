//! Result types produced by a single invocation.

use serde::Serialize;

use crate::arithmetic::Operation;

/// A completed evaluation of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    #[serde(serialize_with = "crate::number::serialize")]
    pub lhs: f64,
    #[serde(serialize_with = "crate::number::serialize")]
    pub rhs: f64,
    #[serde(serialize_with = "crate::number::serialize")]
    pub result: f64,
}

/// What a successful invocation produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Help was requested or no arguments were given.
    Usage,
    /// An operation was evaluated.
    Calculated(Calculation),
}

impl Outcome {
    /// The numeric result, if a calculation ran.
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Usage => None,
            Outcome::Calculated(calc) => Some(calc.result),
        }
    }
}
