//! Output renderers: plain/coloured text and JSON.

pub mod json;
pub mod terminal;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::command::CommandError;
use crate::models::Outcome;

/// Result of one invocation, as handed to a renderer.
pub type InvocationResult = Result<Outcome, CommandError>;

/// Trait for rendering an invocation result to an output format.
pub trait OutputRenderer {
    /// Render the result to a string, including the trailing newline.
    fn render(&self, result: &InvocationResult) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Result: <value>` / `Error: <message>` lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    /// Render `result` using the renderer for this format.
    pub fn render(self, result: &InvocationResult, color: bool) -> String {
        match self {
            OutputFormat::Text => terminal::TerminalRenderer { color }.render(result),
            OutputFormat::Json => json::JsonRenderer.render(result),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: '{other}'. Supported: text, json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Operation;
    use crate::models::Calculation;

    fn sample() -> InvocationResult {
        Ok(Outcome::Calculated(Calculation {
            operation: Operation::Add,
            lhs: 2.0,
            rhs: 3.0,
            result: 5.0,
        }))
    }

    #[test]
    fn parse_format_names() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn render_text() {
        assert_eq!(OutputFormat::Text.render(&sample(), false), "Result: 5.0\n");
    }

    #[test]
    fn render_json() {
        let output = OutputFormat::Json.render(&sample(), false);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["result"], 5.0);
    }
}
