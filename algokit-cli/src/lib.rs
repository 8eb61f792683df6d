//! Support library for the algokit CLI binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive commands without spawning a subprocess.

pub mod cli;
pub mod logging;
