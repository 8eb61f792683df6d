//! Command-line interface for the algokit algorithms.
//!
//! Each command reads one text input (a file, or standard input), parses it
//! into the structure its algorithm expects, runs the algorithm, and renders
//! a plain-text report. Nothing is written until the whole computation has
//! succeeded.

mod commands;
mod input;

pub use commands::{Cli, CliError, Command, InputArgs, InputSource, Report, render_report, run_cli};
pub use input::{GraphInput, InputError, TextPair, parse_graph, parse_text_pair};

#[cfg(test)]
mod test_helpers;
