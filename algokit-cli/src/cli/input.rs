//! Parsers for the plain-text inputs accepted by the CLI.
//!
//! Graph inputs are whitespace-delimited integers: `N E` followed by `E`
//! pairs `tail head`. Line breaks carry no meaning. Text-pair inputs are the
//! first two lines of the input; any further lines are ignored.
//!
//! Parsers only check the shape of the input. Range checks on node ids are
//! left to the core constructors so there is one source of truth for them.

use std::num::ParseIntError;
use std::str::SplitWhitespace;

use thiserror::Error;

// Caps the up-front allocation driven by an untrusted edge count.
const MAX_PREALLOCATED_EDGES: usize = 1 << 16;

/// Errors raised while parsing command input.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// The `N E` header was incomplete.
    #[error("input ended before the {what} in the header")]
    MissingHeader {
        /// Which header value was missing.
        what: &'static str,
    },
    /// Fewer complete edges than the header declared.
    #[error("header declares {declared} edges but input ends after {found}")]
    MissingEdges {
        /// Edge count from the header.
        declared: usize,
        /// Complete edges read before the input ended.
        found: usize,
    },
    /// A token could not be read as a non-negative integer.
    #[error("token {position} (`{token}`) is not a non-negative integer: {source}")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// 1-based position of the token in the input.
        position: usize,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Tokens remained after the declared edges.
    #[error("unexpected token `{token}` after the {declared} declared edges")]
    TrailingInput {
        /// The first surplus token.
        token: String,
        /// Edge count from the header.
        declared: usize,
    },
    /// The text-pair input had fewer than two lines.
    #[error("expected two lines of text but found {found}")]
    MissingLine {
        /// Lines present in the input.
        found: usize,
    },
}

impl InputError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "INPUT_MISSING_HEADER",
            Self::MissingEdges { .. } => "INPUT_MISSING_EDGES",
            Self::InvalidInteger { .. } => "INPUT_INVALID_INTEGER",
            Self::TrailingInput { .. } => "INPUT_TRAILING_TOKENS",
            Self::MissingLine { .. } => "INPUT_MISSING_LINE",
        }
    }
}

/// A parsed graph: node count plus edges in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphInput {
    /// Declared number of nodes.
    pub node_count: usize,
    /// `(tail, head)` pairs in input order.
    pub edges: Vec<(usize, usize)>,
}

/// The two strings compared by the `edit-distance` command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextPair {
    /// First line of the input.
    pub source: String,
    /// Second line of the input.
    pub target: String,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.position += 1;
        Some(token)
    }

    fn next_integer(&mut self) -> Result<Option<usize>, InputError> {
        let Some(token) = self.next_raw() else {
            return Ok(None);
        };
        token
            .parse::<usize>()
            .map(Some)
            .map_err(|source| InputError::InvalidInteger {
                token: token.to_owned(),
                position: self.position,
                source,
            })
    }
}

/// Parses an `N E` header followed by `E` whitespace-separated edge pairs.
///
/// # Errors
/// Returns [`InputError`] when the header or an edge is incomplete, a token
/// is not a non-negative integer, or tokens follow the last declared edge.
///
/// # Examples
/// ```
/// use algokit_cli::cli::parse_graph;
///
/// let graph = parse_graph("3 2\n0 1\n1 2\n")?;
/// assert_eq!(graph.node_count, 3);
/// assert_eq!(graph.edges, vec![(0, 1), (1, 2)]);
/// # Ok::<(), algokit_cli::cli::InputError>(())
/// ```
pub fn parse_graph(text: &str) -> Result<GraphInput, InputError> {
    let mut tokens = Tokens::new(text);
    let node_count = tokens.next_integer()?.ok_or(InputError::MissingHeader {
        what: "node count",
    })?;
    let declared = tokens.next_integer()?.ok_or(InputError::MissingHeader {
        what: "edge count",
    })?;

    let mut edges = Vec::with_capacity(declared.min(MAX_PREALLOCATED_EDGES));
    for found in 0..declared {
        let missing = || InputError::MissingEdges { declared, found };
        let tail = tokens.next_integer()?.ok_or_else(missing)?;
        let head = tokens.next_integer()?.ok_or_else(missing)?;
        edges.push((tail, head));
    }

    if let Some(token) = tokens.next_raw() {
        return Err(InputError::TrailingInput {
            token: token.to_owned(),
            declared,
        });
    }

    Ok(GraphInput { node_count, edges })
}

/// Splits the first two lines of `text` into a [`TextPair`].
///
/// Line terminators (`\n` or `\r\n`) are stripped; an empty line is an empty
/// string.
///
/// # Errors
/// Returns [`InputError::MissingLine`] when fewer than two lines exist.
pub fn parse_text_pair(text: &str) -> Result<TextPair, InputError> {
    let mut lines = text.lines();
    let source = lines.next().ok_or(InputError::MissingLine { found: 0 })?;
    let target = lines.next().ok_or(InputError::MissingLine { found: 1 })?;
    Ok(TextPair {
        source: source.to_owned(),
        target: target.to_owned(),
    })
}
