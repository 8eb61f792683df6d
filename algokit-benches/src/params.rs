//! Benchmark parameter types, rendered as Criterion benchmark ids.

use std::fmt;

/// Parameters for a graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Average out-degree.
    pub edges_per_node: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.edges_per_node)
    }
}

/// Parameters for an edit-distance benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct StringBenchParams {
    /// Length of each compared string in characters.
    pub length: usize,
}

impl fmt::Display for StringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len={}", self.length)
    }
}
