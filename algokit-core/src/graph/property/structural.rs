//! Property runners for depth-first edge classification.
//!
//! - **Oracle equivalence**: discovery order, numbering, and edge kinds match
//!   the recursive colouring oracle.
//! - **Forest structure**: discovery is a permutation, every non-root node has
//!   exactly one incoming tree edge, tree edges point to later preorder
//!   numbers, and roots are the lowest unvisited ids.
//! - **Topology-specific kinds**: self-loops are back edges and acyclic
//!   inputs produce no back edges.
//! - **Determinism**: classifying the same graph twice yields equal results.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DepthFirstTraversal, DirectedGraph, EdgeKind, classify_edges};

use super::oracle::recursive_classify;
use super::types::{GraphFixture, GraphTopology};

fn run_classification(fixture: &GraphFixture) -> Result<DepthFirstTraversal, TestCaseError> {
    let graph = DirectedGraph::new(fixture.node_count, fixture.edges.iter().copied())
        .map_err(|error| TestCaseError::fail(format!("graph rejected: {error}")))?;
    classify_edges(&graph).map_err(|error| {
        TestCaseError::fail(format!(
            "classify_edges failed: {error} (topology={:?}, nodes={}, edges={})",
            fixture.topology,
            fixture.node_count,
            fixture.edges.len(),
        ))
    })
}

/// Compares the traversal against [`recursive_classify`].
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let traversal = run_classification(fixture)?;
    let oracle = recursive_classify(fixture.node_count, &fixture.edges);

    prop_assert_eq!(traversal.discovery_order(), oracle.discovery.as_slice());
    prop_assert_eq!(traversal.edge_kinds(), oracle.kinds.as_slice());
    for node in 0..fixture.node_count {
        prop_assert_eq!(traversal.preorder(node), oracle.preorder.get(node).copied());
        prop_assert_eq!(traversal.postorder(node), oracle.postorder.get(node).copied());
    }
    Ok(())
}

/// Validates the shape of the depth-first forest.
pub(super) fn run_forest_structure_property(fixture: &GraphFixture) -> TestCaseResult {
    let traversal = run_classification(fixture)?;
    let node_count = fixture.node_count;

    let mut sorted = traversal.discovery_order().to_vec();
    sorted.sort_unstable();
    prop_assert_eq!(sorted, (0..node_count).collect::<Vec<_>>());

    let mut incoming_tree = vec![0_usize; node_count];
    for (&(tail, head), kind) in fixture.edges.iter().zip(traversal.edge_kinds()) {
        if *kind == EdgeKind::Tree {
            incoming_tree[head] += 1;
            if traversal.preorder(head) <= traversal.preorder(tail) {
                return Err(TestCaseError::fail(format!(
                    "tree edge ({tail}, {head}) does not lead to a later discovery"
                )));
            }
        }
    }
    for node in 0..node_count {
        let expected = usize::from(!traversal.roots().contains(&node));
        prop_assert_eq!(incoming_tree[node], expected, "node {}", node);
    }
    prop_assert_eq!(
        traversal.count(EdgeKind::Tree),
        node_count - traversal.roots().len()
    );

    validate_roots(&traversal)
}

fn validate_roots(traversal: &DepthFirstTraversal) -> TestCaseResult {
    let roots = traversal.roots();
    if roots.first() != Some(&0) {
        return Err(TestCaseError::fail("the first tree must be rooted at node 0"));
    }
    for &root in roots {
        let root_preorder = traversal.preorder(root);
        if let Some(smaller) = (0..root).find(|&node| traversal.preorder(node) > root_preorder) {
            return Err(TestCaseError::fail(format!(
                "root {root} chosen while smaller node {smaller} was unvisited"
            )));
        }
    }
    Ok(())
}

/// Checks kinds that follow from the topology alone.
pub(super) fn run_topology_kinds_property(fixture: &GraphFixture) -> TestCaseResult {
    let traversal = run_classification(fixture)?;
    for (&(tail, head), kind) in fixture.edges.iter().zip(traversal.edge_kinds()) {
        if tail == head {
            prop_assert_eq!(*kind, EdgeKind::Back, "self-loop on {}", tail);
        }
    }
    if fixture.topology == GraphTopology::Acyclic {
        prop_assert_eq!(traversal.count(EdgeKind::Back), 0);
    }
    Ok(())
}

/// Classifies the same graph twice and compares the results.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let first = run_classification(fixture)?;
    let second = run_classification(fixture)?;
    prop_assert_eq!(first, second);
    Ok(())
}
