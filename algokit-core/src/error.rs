//! Error types for the algokit core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use thiserror::Error;

/// Errors raised while building or traversing graph inputs.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph declared no nodes, so there is nothing to seed a traversal
    /// from.
    #[error("graph must contain at least one node")]
    EmptyGraph,
    /// The declared node count cannot be allocated.
    #[error("cannot allocate storage for {node_count} nodes")]
    TooManyNodes {
        /// The node count that was requested.
        node_count: usize,
    },
    /// An edge referenced a node id outside `0..node_count`.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The offending node id.
        node: usize,
        /// The number of nodes declared for the graph.
        node_count: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("traversal invariant violated: {invariant} (index {index})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Node or edge index at which the violation was detected.
        index: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::EmptyGraph => GraphErrorCode::EmptyGraph,
            Self::TooManyNodes { .. } => GraphErrorCode::TooManyNodes,
            Self::InvalidNodeId { .. } => GraphErrorCode::InvalidNodeId,
            Self::InvariantViolation { .. } => GraphErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// The graph declared no nodes.
    EmptyGraph,
    /// The declared node count exceeded available memory.
    TooManyNodes,
    /// An edge referenced a node id that is not present in the graph.
    InvalidNodeId,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "GRAPH_EMPTY",
            Self::TooManyNodes => "GRAPH_TOO_MANY_NODES",
            Self::InvalidNodeId => "GRAPH_INVALID_NODE_ID",
            Self::InvariantViolation => "GRAPH_INVARIANT_VIOLATION",
        }
    }
}

impl std::fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
