//! calcli: four-function command line calculator.
//!
//! Entry point and error handling boundary. Calculation errors are
//! rendered to stdout and mapped to exit codes; configuration failures go
//! through `anyhow` and print to stderr.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use calcli::command;
use calcli::config::Config;
use calcli::env::Env;
use calcli::logging;

use cli::Settings;
use cli::args::Cli;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let env = Env::real();
    logging::init(cli.verbose, &env);

    let config = Config::load(cli.config.as_deref(), &env)
        .context("failed to load configuration")?;
    let settings = Settings::detect(&cli, &config);
    colored::control::set_override(settings.color);
    debug!(?settings, "resolved output settings");

    let result = command::calculate(&cli.tokens);
    let code = match &result {
        Ok(outcome) => {
            if let Some(value) = outcome.value() {
                info!(value, "calculation complete");
            }
            0
        }
        Err(err) => {
            info!(kind = %err.kind(), "calculation failed: {err}");
            err.kind().exit_code()
        }
    };

    print!("{}", settings.format.render(&result, settings.color));
    Ok(ExitCode::from(code))
}
