//! Static usage text.

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::arithmetic::Operation;
use crate::constants::APP_NAME;

/// Build the usage message shown for `--help`, `-h`, or no arguments.
pub fn usage_text() -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{APP_NAME}: a command line calculator");
    let _ = writeln!(text);
    let _ = writeln!(text, "Usage:");
    let _ = writeln!(text, "    {APP_NAME} [OPTIONS] <operation> <num1> <num2>");
    let _ = writeln!(text);
    let _ = writeln!(text, "Operations:");
    for op in Operation::iter() {
        let _ = writeln!(text, "    {:<10}{}", op.to_string(), op.description());
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "Options:");
    let _ = writeln!(text, "    --format <text|json>  Output format");
    let _ = writeln!(text, "    --config <PATH>       Read configuration from PATH");
    let _ = writeln!(text, "    --no-color            Disable coloured output");
    let _ = writeln!(text, "    -v, --verbose         Increase log verbosity (repeatable)");
    let _ = writeln!(text, "    -h, --help            Show this message");
    let _ = writeln!(text, "    -V, --version         Print version");
    let _ = writeln!(text);
    let _ = writeln!(text, "Options must come before the operation.");
    let _ = writeln!(text);
    let _ = writeln!(text, "Examples:");
    let _ = writeln!(text, "    {APP_NAME} add 5 3");
    let _ = writeln!(text, "    {APP_NAME} multiply 4.5 2");
    let _ = writeln!(text, "    {APP_NAME} --format json divide 1 3");
    text
}
