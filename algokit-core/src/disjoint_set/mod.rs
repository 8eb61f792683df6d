//! Disjoint-set forest used to count connected components.
//!
//! Every element starts as its own root. `union` redirects the root of the
//! second argument's tree to the root of the first, so parent links only ever
//! leave a root and `find` always terminates. There is no path compression
//! and no union by rank: tree depth grows with the merge history, which is
//! acceptable for the one-shot connectivity counts this type serves.


use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

/// Partition of `0..len` into disjoint components.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            components: len,
        }
    }

    /// Creates `len` singleton components, failing instead of aborting when
    /// the parent links cannot be allocated.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyNodes`] when the allocation fails.
    pub fn try_new(len: usize) -> Result<Self> {
        let mut parent = Vec::new();
        parent
            .try_reserve_exact(len)
            .map_err(|_| GraphError::TooManyNodes { node_count: len })?;
        parent.extend(0..len);
        Ok(Self {
            parent,
            components: len,
        })
    }

    /// Builds a partition of `0..node_count` from undirected edges.
    ///
    /// Every endpoint is validated before any union is performed.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when an endpoint is
    /// `>= node_count` and [`GraphError::TooManyNodes`] when `node_count`
    /// elements cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use algokit_core::DisjointSet;
    ///
    /// let set = DisjointSet::from_edges(5, [(0, 1), (1, 2), (3, 4)])?;
    /// assert_eq!(set.component_count(), 2);
    /// assert_eq!(set.min_connecting_edges(), 1);
    /// # Ok::<(), algokit_core::GraphError>(())
    /// ```
    #[instrument(name = "disjoint_set.from_edges", err, skip(edges), fields(edges = tracing::field::Empty))]
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let edges: Vec<(usize, usize)> = edges.into_iter().collect();
        tracing::Span::current().record("edges", edges.len());
        if let Some(node) = edges
            .iter()
            .flat_map(|&(left, right)| [left, right])
            .find(|&node| node >= node_count)
        {
            return Err(GraphError::InvalidNodeId { node, node_count });
        }

        let mut set = Self::try_new(node_count)?;
        for (left, right) in edges {
            set.union(left, right);
        }
        debug!(
            components = set.component_count(),
            "disjoint set construction completed"
        );
        Ok(set)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the partition has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the component containing `node`.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[must_use]
    pub fn find(&self, node: usize) -> usize {
        let mut current = node;
        while self.parent[current] != current {
            current = self.parent[current];
        }
        current
    }

    /// Merges the components of `left` and `right`, attaching the root of
    /// `right` under the root of `left`.
    ///
    /// Returns `false` without changing anything when both are already in
    /// the same component.
    ///
    /// # Panics
    /// Panics if either id is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[right_root] = left_root;
        self.components -= 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("disjoint_set_unions").increment(1);
        true
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    /// Panics if either id is `>= self.len()`.
    #[must_use]
    pub fn connected(&self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the fewest edges that would join every component into one,
    /// which is zero for an empty partition.
    #[must_use]
    pub fn min_connecting_edges(&self) -> usize {
        self.components.saturating_sub(1)
    }
}
