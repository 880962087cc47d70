//! Shared types used across modules.
//!
//! The command layer produces these and the output renderers consume them,
//! so neither side reaches into the other's internals.

pub mod calculation;

pub use calculation::{Calculation, Outcome};
