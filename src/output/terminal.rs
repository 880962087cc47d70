//! Terminal renderer: one `Result:` or `Error:` line, or the usage text.

use colored::Colorize;

use crate::arithmetic::ArithmeticError;
use crate::command::{CommandError, usage_text};
use crate::constants::DIVISION_BY_ZERO_MESSAGE;
use crate::models::Outcome;
use crate::number::format_number;
use crate::output::{InvocationResult, OutputRenderer};

/// Text output renderer, optionally coloured.
pub struct TerminalRenderer {
    pub color: bool,
}

impl TerminalRenderer {
    fn error_message(err: &CommandError) -> String {
        match err {
            CommandError::Arithmetic(ArithmeticError::DivisionByZero) => {
                DIVISION_BY_ZERO_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, result: &InvocationResult) -> String {
        match result {
            Ok(Outcome::Usage) => usage_text(),
            Ok(Outcome::Calculated(calc)) => {
                let value = format_number(calc.result);
                if self.color {
                    format!("{} {}\n", "Result:".bold(), value.green().bold())
                } else {
                    format!("Result: {value}\n")
                }
            }
            Err(err) => {
                let message = Self::error_message(err);
                if self.color {
                    format!("{} {}\n", "Error:".red().bold(), message)
                } else {
                    format!("Error: {message}\n")
                }
            }
        }
    }
}
