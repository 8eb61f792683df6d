//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::execute;
use super::{CliError, Command, InputArgs, Report, render_report};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_input_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Runs `command` against `text` and renders the report.
pub(super) fn execute_and_render(command: &Command, text: &str) -> Result<String, Box<dyn std::error::Error>> {
    let report = execute(command, text)?;
    Ok(render(&report)?)
}

pub(super) fn render(report: &Report) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_report(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub(super) fn execute_expecting_error(command: &Command, text: &str, panic_msg: &str) -> CliError {
    match execute(command, text) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn dfs() -> Command {
    Command::Dfs(InputArgs::default())
}

pub(super) fn edit_distance() -> Command {
    Command::EditDistance(InputArgs::default())
}

pub(super) fn connect() -> Command {
    Command::Connect(InputArgs::default())
}
