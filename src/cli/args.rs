//! Clap argument types.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use calcli::output::OutputFormat;

/// Four-function command line calculator.
///
/// Help is handled by the calculator itself so that `-h` / `--help` print
/// the same usage text wherever they appear among the arguments.
#[derive(Parser, Debug)]
#[command(
    name = "calcli",
    version = calcli::constants::VERSION,
    disable_help_flag = true,
)]
pub struct Cli {
    /// Output format (overrides config and CALCLI_FORMAT).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read configuration from this TOML file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// `<operation> <num1> <num2>`, or `--help`.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}
