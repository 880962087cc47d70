//! JSON output renderer.
//!
//! Outputs one of:
//! - `{"operation": ..., "lhs": ..., "rhs": ..., "result": ...}`
//! - `{"error": {"kind": ..., "message": ...}}`
//! - `{"usage": "..."}`

use crate::command::usage_text;
use crate::models::Outcome;
use crate::output::{InvocationResult, OutputRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, result: &InvocationResult) -> String {
        let output = match result {
            Ok(Outcome::Usage) => serde_json::json!({ "usage": usage_text() }),
            Ok(Outcome::Calculated(calc)) => serde_json::json!(calc),
            Err(err) => serde_json::json!({
                "error": {
                    "kind": err.kind(),
                    "message": err.to_string(),
                }
            }),
        };

        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
