//! Command implementations and argument parsing for the algokit CLI.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use algokit_core::{
    Alignment, DepthFirstTraversal, DirectedGraph, DisjointSet, GraphError, align, classify_edges,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, parse_graph, parse_text_pair};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "algokit",
    about = "Run classic graph and string algorithms over plain-text input."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Number the nodes of a directed graph in depth-first preorder and
    /// classify every edge as tree, forward, back, or cross.
    Dfs(InputArgs),
    /// Compute the edit distance between two lines and an optimal alignment.
    EditDistance(InputArgs),
    /// Count the edges needed to connect every component of an undirected
    /// graph.
    Connect(InputArgs),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Dfs(_) => "dfs",
            Self::EditDistance(_) => "edit-distance",
            Self::Connect(_) => "connect",
        }
    }

    const fn args(&self) -> &InputArgs {
        match self {
            Self::Dfs(args) | Self::EditDistance(args) | Self::Connect(args) => args,
        }
    }
}

/// Input selection shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct InputArgs {
    /// Input file. Reads standard input when omitted or `-`.
    pub path: Option<PathBuf>,
}

impl InputArgs {
    /// Resolves the argument to an [`InputSource`].
    #[must_use]
    pub fn source(&self) -> InputSource {
        match &self.path {
            Some(path) if path != Path::new("-") => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }
}

/// Where a command reads its input from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "`{}`", path.display()),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input failed.
    #[error("failed to read {input}: {source}")]
    Io {
        /// Input that triggered the failure.
        input: InputSource,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The parsed input violated a core precondition.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Returns a stable, machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Input(error) => error.code(),
            Self::Core(error) => error.code().as_str(),
        }
    }
}

/// Outcome of a successful command, ready to render.
#[derive(Debug, Clone)]
pub enum Report {
    /// Result of the `dfs` command.
    Traversal {
        /// The graph that was traversed.
        graph: DirectedGraph,
        /// Numbering and edge kinds produced by the traversal.
        traversal: DepthFirstTraversal,
    },
    /// Result of the `edit-distance` command.
    Alignment(Alignment),
    /// Result of the `connect` command.
    Connectivity {
        /// Number of connected components.
        components: usize,
        /// Edges needed to connect them.
        connecting_edges: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or validating the input
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use algokit_cli::cli::{Cli, Command, InputArgs, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "5 3\n0 1\n1 2\n3 4\n")?;
/// let cli = Cli {
///     command: Command::Connect(InputArgs {
///         path: Some(file.path().to_path_buf()),
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert!(matches!(report, Report::Connectivity { connecting_edges: 1, .. }));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, input = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let source = cli.command.args().source();
    let span = Span::current();
    span.record("command", field::display(cli.command.label()));
    span.record("input", field::display(&source));

    let text = read_input(&source)?;
    execute(&cli.command, &text)
}

pub(super) fn execute(command: &Command, text: &str) -> Result<Report, CliError> {
    match command {
        Command::Dfs(_) => run_dfs(text),
        Command::EditDistance(_) => run_edit_distance(text),
        Command::Connect(_) => run_connect(text),
    }
}

#[instrument(name = "cli.read_input", err, fields(bytes = field::Empty))]
pub(super) fn read_input(source: &InputSource) -> Result<String, CliError> {
    let result = match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text).map(|_| text)
        }
        InputSource::File(path) => fs::read_to_string(path),
    };
    let text = result.map_err(|error| CliError::Io {
        input: source.clone(),
        source: error,
    })?;
    Span::current().record("bytes", text.len());
    Ok(text)
}

#[instrument(
    name = "cli.dfs",
    err,
    skip(text),
    fields(nodes = field::Empty, edges = field::Empty),
)]
pub(super) fn run_dfs(text: &str) -> Result<Report, CliError> {
    let input = parse_graph(text)?;
    let span = Span::current();
    span.record("nodes", input.node_count);
    span.record("edges", input.edges.len());

    let graph = DirectedGraph::new(input.node_count, input.edges)?;
    let traversal = classify_edges(&graph)?;
    info!(
        roots = traversal.roots().len(),
        "depth-first classification completed"
    );
    Ok(Report::Traversal { graph, traversal })
}

#[instrument(
    name = "cli.edit_distance",
    err,
    skip(text),
    fields(distance = field::Empty),
)]
pub(super) fn run_edit_distance(text: &str) -> Result<Report, CliError> {
    let pair = parse_text_pair(text)?;
    let alignment = align(&pair.source, &pair.target);
    Span::current().record("distance", alignment.distance());
    info!(
        columns = alignment.columns().len(),
        "edit distance completed"
    );
    Ok(Report::Alignment(alignment))
}

#[instrument(
    name = "cli.connect",
    err,
    skip(text),
    fields(nodes = field::Empty, edges = field::Empty),
)]
pub(super) fn run_connect(text: &str) -> Result<Report, CliError> {
    let input = parse_graph(text)?;
    let span = Span::current();
    span.record("nodes", input.node_count);
    span.record("edges", input.edges.len());

    let set = DisjointSet::from_edges(input.node_count, input.edges)?;
    info!(
        components = set.component_count(),
        "connectivity count completed"
    );
    Ok(Report::Connectivity {
        components: set.component_count(),
        connecting_edges: set.min_connecting_edges(),
    })
}

/// Renders `report` to `writer`.
///
/// - `dfs`: the discovery order on one line, then `tail head kind` for every
///   edge in input order, where `kind` is one of `t`, `f`, `b`, `c`.
/// - `edit-distance`: the distance, then both aligned strings with spaces
///   marking gaps.
/// - `connect`: the number of edges needed to connect the graph.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use algokit_cli::cli::{Report, render_report};
/// let report = Report::Alignment(algokit_core::align("kitten", "sitting"));
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "3\nkitten \nsitting\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Traversal { graph, traversal } => {
            let order: Vec<String> = traversal
                .discovery_order()
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(writer, "{}", order.join(" "))?;
            for (edge, kind) in graph.edges().iter().zip(traversal.edge_kinds()) {
                writeln!(writer, "{} {} {}", edge.tail(), edge.head(), kind.as_char())?;
            }
        }
        Report::Alignment(alignment) => {
            writeln!(writer, "{}", alignment.distance())?;
            writeln!(writer, "{}", alignment.aligned_source())?;
            writeln!(writer, "{}", alignment.aligned_target())?;
        }
        Report::Connectivity {
            connecting_edges, ..
        } => writeln!(writer, "{connecting_edges}")?,
    }
    Ok(())
}
