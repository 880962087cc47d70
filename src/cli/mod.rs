//! CLI command definitions and settings resolution.
//!
//! Uses clap derive macros for argument definitions; flags given on the
//! command line override the layered [`Config`].

pub mod args;

use std::io::IsTerminal;

use calcli::config::Config;
use calcli::output::OutputFormat;

use args::Cli;

/// Effective output settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub color: bool,
}

impl Settings {
    /// Combine CLI flags with the loaded config.
    ///
    /// `stdout_is_terminal` gates colour so piped output stays plain.
    pub fn resolve(cli: &Cli, config: &Config, stdout_is_terminal: bool) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            color: config.output.color && !cli.no_color && stdout_is_terminal,
        }
    }

    /// Resolve against the real stdout.
    pub fn detect(cli: &Cli, config: &Config) -> Self {
        Self::resolve(cli, config, std::io::stdout().is_terminal())
    }
}
