//! Strategy builders for edge-classification property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, GraphTopology};

const MIN_NODES: usize = 1;
const MAX_NODES: usize = 48;
const DENSE_MAX_NODES: usize = 20;

/// Generates fixtures across every [`GraphTopology`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphTopology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(super) fn generate_fixture(topology: GraphTopology, rng: &mut SmallRng) -> GraphFixture {
    let edges_for = |node_count: usize, rng: &mut SmallRng| match topology {
        GraphTopology::Sparse => random_edges(rng, node_count, 1, 2),
        GraphTopology::Dense => dense_edges(rng, node_count),
        GraphTopology::Acyclic => acyclic_edges(rng, node_count),
        GraphTopology::Disconnected => block_edges(rng, node_count),
        GraphTopology::Multigraph => multigraph_edges(rng, node_count),
    };
    let max_nodes = if topology == GraphTopology::Dense {
        DENSE_MAX_NODES
    } else {
        MAX_NODES
    };
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edges = edges_for(node_count, rng);
    GraphFixture {
        node_count,
        edges,
        topology,
    }
}

fn random_edges(
    rng: &mut SmallRng,
    node_count: usize,
    min_per_node: usize,
    max_per_node: usize,
) -> Vec<(usize, usize)> {
    let edge_count = rng.gen_range(node_count * min_per_node..=node_count * max_per_node);
    (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

fn dense_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let probability: f64 = rng.gen_range(0.4..=0.9);
    let mut edges = Vec::new();
    for tail in 0..node_count {
        for head in 0..node_count {
            if rng.gen_bool(probability) {
                edges.push((tail, head));
            }
        }
    }
    edges
}

fn acyclic_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for tail in 0..node_count {
        for head in (tail + 1)..node_count {
            if rng.gen_bool(0.2) {
                edges.push((tail, head));
            }
        }
    }
    // Shuffle input order without breaking acyclicity.
    for index in (1..edges.len()).rev() {
        let other = rng.gen_range(0..=index);
        edges.swap(index, other);
    }
    edges
}

fn block_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let block = rng.gen_range(1..=node_count.clamp(1, 6));
    let mut edges = Vec::new();
    for start in (0..node_count).step_by(block) {
        let end = (start + block).min(node_count);
        for _ in 0..(end - start) * 2 {
            edges.push((rng.gen_range(start..end), rng.gen_range(start..end)));
        }
    }
    edges
}

fn multigraph_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    let mut edges = random_edges(rng, node_count, 1, 2);
    for node in 0..node_count {
        if rng.gen_bool(0.3) {
            edges.push((node, node));
        }
    }
    let duplicates: Vec<_> = edges.iter().copied().filter(|_| rng.gen_bool(0.25)).collect();
    edges.extend(duplicates);
    edges
}
