//! Type definitions for edge-classification property tests.

use test_strategy::Arbitrary;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphTopology {
    /// Roughly one to two edges per node.
    Sparse,
    /// Edge probability between 0.4 and 0.9 for every ordered pair.
    Dense,
    /// Edges only run from lower to higher ids, so no cycles exist.
    Acyclic,
    /// Several blocks of nodes with edges confined to each block.
    Disconnected,
    /// Sparse edges mixed with self-loops and duplicated edges.
    Multigraph,
}

/// Fixture for classification property tests.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Edges in input order.
    pub edges: Vec<(usize, usize)>,
    /// Topology used during generation.
    pub topology: GraphTopology,
}
