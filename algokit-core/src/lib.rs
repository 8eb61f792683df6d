//! Algokit core library.
//!
//! Three independent classical algorithms, each a pure transform over
//! in-memory input:
//!
//! - depth-first edge classification of a directed graph
//!   ([`classify_edges`]);
//! - edit distance with an optimal character alignment ([`align`]);
//! - a disjoint-set forest for counting connected components
//!   ([`DisjointSet`]).
//!
//! None of them performs I/O. Input validation happens when the input
//! structures are built ([`DirectedGraph::new`], [`DisjointSet::from_edges`]).
//!
//! When the `metrics` feature is enabled the crate emits:
//!
//! - `dfs_edges_classified` (counter, labelled with `kind`)
//! - `disjoint_set_unions` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edit_distance;
mod error;
mod graph;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edit_distance::{
        Alignment, AlignmentColumn, AlignmentOp, EditDistanceTable, GAP, OperationCounts, align,
        edit_distance,
    },
    error::{GraphError, GraphErrorCode, Result},
    graph::{DepthFirstTraversal, DirectedGraph, Edge, EdgeKind, classify_edges},
};
