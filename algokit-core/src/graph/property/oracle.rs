//! Recursive reference implementation of depth-first edge classification.
//!
//! Uses the textbook white/grey/black colouring instead of preorder and
//! postorder comparisons, so agreement with the explicit-stack traversal is
//! meaningful rather than tautological.

use crate::EdgeKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Colour {
    White,
    Grey,
    Black,
}

/// Output of [`recursive_classify`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleTraversal {
    pub discovery: Vec<usize>,
    pub kinds: Vec<EdgeKind>,
    pub preorder: Vec<usize>,
    pub postorder: Vec<usize>,
}

struct Oracle<'a> {
    edges: &'a [(usize, usize)],
    adjacency: Vec<Vec<usize>>,
    colour: Vec<Colour>,
    kinds: Vec<Option<EdgeKind>>,
    discovery: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
    finished: usize,
}

/// Classifies `edges` with recursive depth-first search, restarting from
/// every still-white node in ascending id order.
pub(super) fn recursive_classify(node_count: usize, edges: &[(usize, usize)]) -> OracleTraversal {
    let mut adjacency = vec![Vec::new(); node_count];
    for (index, &(tail, _)) in edges.iter().enumerate() {
        adjacency[tail].push(index);
    }

    let mut oracle = Oracle {
        edges,
        adjacency,
        colour: vec![Colour::White; node_count],
        kinds: vec![None; edges.len()],
        discovery: Vec::new(),
        preorder: vec![0; node_count],
        postorder: vec![0; node_count],
        finished: 0,
    };
    for root in 0..node_count {
        if oracle.colour[root] == Colour::White {
            oracle.visit(root);
        }
    }

    OracleTraversal {
        discovery: oracle.discovery,
        kinds: oracle
            .kinds
            .into_iter()
            .map(|kind| kind.expect("oracle classifies every edge"))
            .collect(),
        preorder: oracle.preorder,
        postorder: oracle.postorder,
    }
}

impl Oracle<'_> {
    fn visit(&mut self, node: usize) {
        self.colour[node] = Colour::Grey;
        self.discovery.push(node);
        self.preorder[node] = self.discovery.len();

        for edge in self.adjacency[node].clone() {
            let head = self.edges[edge].1;
            let kind = match self.colour[head] {
                Colour::White => {
                    self.kinds[edge] = Some(EdgeKind::Tree);
                    self.visit(head);
                    continue;
                }
                Colour::Grey => EdgeKind::Back,
                Colour::Black if self.preorder[head] > self.preorder[node] => EdgeKind::Forward,
                Colour::Black => EdgeKind::Cross,
            };
            self.kinds[edge] = Some(kind);
        }

        self.colour[node] = Colour::Black;
        self.finished += 1;
        self.postorder[node] = self.finished;
    }
}
