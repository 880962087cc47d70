//! calcli: four-function command line calculator (library crate).
//!
//! Re-exports public modules for the binary, integration tests and
//! external use.

pub mod arithmetic;
pub mod command;
pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod number;
pub mod output;
