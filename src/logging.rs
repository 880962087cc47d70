//! Diagnostic logging on stderr.
//!
//! Verbosity comes from repeated `-v` flags; `CALCLI_LOG` takes a full
//! `tracing` filter directive and wins over the flags when it parses.

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Filter level for a given `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from the environment override or the verbosity count.
pub fn filter(verbosity: u8, env: &Env) -> EnvFilter {
    if let Some(directive) = env.var(ENV_LOG) {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Warning: ignoring invalid {ENV_LOG} value {directive:?}: {e}"),
        }
    }
    EnvFilter::new(level_for(verbosity))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity, env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
