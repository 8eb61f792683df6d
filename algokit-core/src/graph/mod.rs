//! Directed graph arena and depth-first edge classification.
//!
//! Nodes are the indices `0..node_count`; edges are indices into the
//! input-ordered edge list. Each node owns the ordered list of its outgoing
//! edge indices, which fixes the order in which a traversal explores them.
//! The graph is immutable once built: traversal state lives in the
//! traversal, so the same graph can be classified any number of times.

mod classify;

#[cfg(test)]
mod property;

pub use self::classify::{DepthFirstTraversal, EdgeKind, classify_edges};

use crate::error::{GraphError, Result};

/// A directed edge `tail -> head`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    tail: usize,
    head: usize,
}

impl Edge {
    /// Returns the node the edge leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tail(&self) -> usize { self.tail }

    /// Returns the node the edge enters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn head(&self) -> usize { self.head }

    /// Returns `true` when the edge starts and ends at the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }
}

/// Directed multigraph over the nodes `0..node_count`.
///
/// Duplicate edges and self-loops are permitted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectedGraph {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Builds a graph from `(tail, head)` pairs, preserving their order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `node_count` is zero,
    /// [`GraphError::TooManyNodes`] when the adjacency lists cannot be
    /// allocated, and [`GraphError::InvalidNodeId`] when an endpoint is
    /// `>= node_count`.
    ///
    /// # Examples
    /// ```
    /// use algokit_core::DirectedGraph;
    ///
    /// let graph = DirectedGraph::new(3, [(0, 1), (1, 2), (2, 2)])?;
    /// assert_eq!(graph.edge_count(), 3);
    /// assert_eq!(graph.outgoing(1), &[1]);
    /// # Ok::<(), algokit_core::GraphError>(())
    /// ```
    pub fn new(node_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency
            .try_reserve_exact(node_count)
            .map_err(|_| GraphError::TooManyNodes { node_count })?;
        adjacency.resize_with(node_count, Vec::new);

        let mut stored = Vec::new();
        for (tail, head) in edges {
            let node = if tail >= node_count { tail } else { head };
            let outgoing = adjacency
                .get_mut(tail)
                .filter(|_| head < node_count)
                .ok_or(GraphError::InvalidNodeId { node, node_count })?;
            outgoing.push(stored.len());
            stored.push(Edge { tail, head });
        }

        Ok(Self {
            edges: stored,
            adjacency,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the indices of the edges leaving `node`, in input order.
    ///
    /// Unknown nodes have no outgoing edges.
    #[must_use]
    pub fn outgoing(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn edge(&self, index: usize) -> Option<Edge> {
        self.edges.get(index).copied()
    }
}
