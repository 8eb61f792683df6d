//! Seeded synthetic inputs for benchmarking.
//!
//! Every generator takes an explicit seed so repeated runs measure the same
//! workload.

use algokit_core::{DirectedGraph, DisjointSet, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

const ALPHABET: &[u8] = b"acgt";

/// Errors that may occur during synthetic input generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Average out-degree; the edge count is `node_count * edges_per_node`.
    pub edges_per_node: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A random edge list with uniformly chosen endpoints.
///
/// # Examples
///
/// ```
/// use algokit_benches::source::{SyntheticGraph, SyntheticGraphConfig};
///
/// let config = SyntheticGraphConfig { node_count: 10, edges_per_node: 3, seed: 42 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.edges().len(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

impl SyntheticGraph {
    /// Generates the edge list eagerly from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let edge_count = config.node_count.saturating_mul(config.edges_per_node);
        let edges = (0..edge_count)
            .map(|_| {
                (
                    rng.gen_range(0..config.node_count),
                    rng.gen_range(0..config.node_count),
                )
            })
            .collect();

        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the generated `(tail, head)` pairs.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Builds a [`DirectedGraph`] over the generated edges.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from graph validation.
    pub fn directed(&self) -> Result<DirectedGraph, GraphError> {
        DirectedGraph::new(self.node_count, self.edges.iter().copied())
    }

    /// Builds a [`DisjointSet`] treating every edge as undirected.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from endpoint validation.
    pub fn disjoint_set(&self) -> Result<DisjointSet, GraphError> {
        DisjointSet::from_edges(self.node_count, self.edges.iter().copied())
    }
}

/// Generates a string of `length` characters over a four-letter alphabet.
///
/// # Examples
///
/// ```
/// use algokit_benches::source::random_string;
///
/// assert_eq!(random_string(16, 7), random_string(16, 7));
/// assert_eq!(random_string(16, 7).chars().count(), 16);
/// ```
#[must_use]
pub fn random_string(length: usize, seed: u64) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..length)
        .map(|_| {
            let index = rng.gen_range(0..ALPHABET.len());
            ALPHABET.get(index).map_or('a', |&byte| char::from(byte))
        })
        .collect()
}
