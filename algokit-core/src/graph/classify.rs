//! Depth-first traversal that numbers nodes and classifies every edge.
//!
//! Recursion is simulated with an explicit stack of edge frames. A frame is
//! examined once when it first reaches the top of the stack and retired once
//! everything pushed above it has been retired, which is the point at which a
//! recursive implementation would return from the call for the frame's head.
//! Frames without an edge seed a new tree of the depth-first forest; they
//! always target the smallest node id not yet visited.

use std::fmt;

use tracing::{Span, debug, field, instrument};

use super::DirectedGraph;
use crate::error::{GraphError, Result};

/// Classification of a directed edge relative to a depth-first forest.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeKind {
    /// The edge first discovered its head.
    Tree,
    /// The head is a descendant of the tail that was already discovered
    /// through another path.
    Forward,
    /// The head is an ancestor of the tail whose exploration has not
    /// finished. Self-loops are always back edges.
    Back,
    /// The head lies in a subtree that had already finished and is not an
    /// ancestor of the tail.
    Cross,
}

impl EdgeKind {
    /// All kinds in reporting order.
    pub const ALL: [Self; 4] = [Self::Tree, Self::Forward, Self::Back, Self::Cross];

    /// Returns the single-letter code (`t`, `f`, `b`, `c`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Tree => 't',
            Self::Forward => 'f',
            Self::Back => 'b',
            Self::Cross => 'c',
        }
    }

    /// Returns the lower-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Forward => "forward",
            Self::Back => "back",
            Self::Cross => "cross",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`classify_edges`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepthFirstTraversal {
    discovery: Vec<usize>,
    kinds: Vec<EdgeKind>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
    roots: Vec<usize>,
}

impl DepthFirstTraversal {
    /// Returns node ids in the order they were discovered.
    #[must_use]
    #[rustfmt::skip]
    pub fn discovery_order(&self) -> &[usize] { &self.discovery }

    /// Returns the kind of every edge, indexed like [`DirectedGraph::edges`].
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_kinds(&self) -> &[EdgeKind] { &self.kinds }

    /// Returns the kind of edge `edge`, or `None` for an unknown index.
    #[must_use]
    pub fn edge_kind(&self, edge: usize) -> Option<EdgeKind> {
        self.kinds.get(edge).copied()
    }

    /// Returns the 1-based preorder number of `node`.
    #[must_use]
    pub fn preorder(&self, node: usize) -> Option<usize> {
        self.preorder.get(node).copied()
    }

    /// Returns the 1-based postorder number of `node`.
    #[must_use]
    pub fn postorder(&self, node: usize) -> Option<usize> {
        self.postorder.get(node).copied()
    }

    /// Returns the root of every tree in the forest, in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn roots(&self) -> &[usize] { &self.roots }

    /// Returns how many edges were classified as `kind`.
    #[must_use]
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.kinds.iter().filter(|&&candidate| candidate == kind).count()
    }
}

/// Runs a depth-first traversal over `graph` and classifies every edge.
///
/// Trees of the forest are rooted at node 0 and then at the smallest
/// unvisited node id whenever the stack drains. Outgoing edges are explored
/// in input order. The result is fully determined by the graph.
///
/// # Errors
/// Returns [`GraphError::InvariantViolation`] if the traversal finishes with
/// an unnumbered node or an unclassified edge. This cannot happen for graphs
/// built through [`DirectedGraph::new`].
///
/// # Examples
/// ```
/// use algokit_core::{DirectedGraph, EdgeKind, classify_edges};
///
/// let graph = DirectedGraph::new(3, [(0, 1), (1, 2), (2, 0), (0, 2)])?;
/// let traversal = classify_edges(&graph)?;
/// assert_eq!(traversal.discovery_order(), &[0, 1, 2]);
/// assert_eq!(
///     traversal.edge_kinds(),
///     &[EdgeKind::Tree, EdgeKind::Tree, EdgeKind::Back, EdgeKind::Forward]
/// );
/// # Ok::<(), algokit_core::GraphError>(())
/// ```
#[instrument(
    name = "graph.classify_edges",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), roots = field::Empty),
)]
pub fn classify_edges(graph: &DirectedGraph) -> Result<DepthFirstTraversal> {
    let mut walker = Walker::new(graph);
    walker.run()?;
    let traversal = walker.finish()?;

    Span::current().record("roots", traversal.roots.len());
    debug!(
        tree = traversal.count(EdgeKind::Tree),
        forward = traversal.count(EdgeKind::Forward),
        back = traversal.count(EdgeKind::Back),
        cross = traversal.count(EdgeKind::Cross),
        "edge classification completed"
    );
    Ok(traversal)
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    /// `None` for the synthetic frame seeding a new tree.
    edge: Option<usize>,
    head: usize,
    state: FrameState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FrameState {
    Pending,
    /// `discovered` is set when examining the frame visited its head, which
    /// makes the frame a tree edge (or a seed) that owes its head a postorder
    /// number on retirement.
    Explored { discovered: bool },
}

impl Frame {
    const fn seed(head: usize) -> Self {
        Self {
            edge: None,
            head,
            state: FrameState::Pending,
        }
    }

    const fn along(edge: usize, head: usize) -> Self {
        Self {
            edge: Some(edge),
            head,
            state: FrameState::Pending,
        }
    }
}

struct Walker<'g> {
    graph: &'g DirectedGraph,
    stack: Vec<Frame>,
    // 0 means unassigned; assigned numbers start at 1.
    preorder: Vec<usize>,
    postorder: Vec<usize>,
    kinds: Vec<Option<EdgeKind>>,
    discovery: Vec<usize>,
    roots: Vec<usize>,
    next_postorder: usize,
    min_unvisited: usize,
}

impl<'g> Walker<'g> {
    fn new(graph: &'g DirectedGraph) -> Self {
        let node_count = graph.node_count();
        Self {
            graph,
            stack: Vec::new(),
            // Sized from the adjacency lists the graph already holds.
            preorder: vec![0; node_count],
            postorder: vec![0; node_count],
            kinds: vec![None; graph.edge_count()],
            discovery: Vec::with_capacity(node_count),
            roots: Vec::new(),
            next_postorder: 1,
            min_unvisited: 0,
        }
    }

    fn run(&mut self) -> Result<()> {
        self.reseed();
        while let Some(frame) = self.stack.last().copied() {
            match frame.state {
                FrameState::Explored { discovered } => self.retire(frame.head, discovered),
                FrameState::Pending => self.examine(frame)?,
            }
        }
        Ok(())
    }

    fn examine(&mut self, frame: Frame) -> Result<()> {
        let discovered = !self.is_visited(frame.head);
        if let Some(top) = self.stack.last_mut() {
            top.state = FrameState::Explored { discovered };
        }

        if discovered {
            self.discover(frame);
            Ok(())
        } else {
            self.classify_revisit(frame)
        }
    }

    fn discover(&mut self, frame: Frame) {
        let head = frame.head;
        self.discovery.push(head);
        self.preorder[head] = self.discovery.len();
        self.advance_cursor();

        match frame.edge {
            Some(edge) => self.record(edge, EdgeKind::Tree),
            None => self.roots.push(head),
        }

        // Reversed so the first outgoing edge is popped first.
        let graph = self.graph;
        self.stack.extend(
            graph
                .outgoing(head)
                .iter()
                .rev()
                .filter_map(|&edge| graph.edge(edge).map(|e| Frame::along(edge, e.head()))),
        );
    }

    fn classify_revisit(&mut self, frame: Frame) -> Result<()> {
        let Some(edge) = frame.edge else {
            return Err(GraphError::InvariantViolation {
                invariant: "seed frames target unvisited nodes",
                index: frame.head,
            });
        };
        let tail = self
            .graph
            .edge(edge)
            .map(|e| e.tail())
            .ok_or(GraphError::InvariantViolation {
                invariant: "stacked edges exist in the graph",
                index: edge,
            })?;

        let head = frame.head;
        let kind = if self.preorder[head] > self.preorder[tail] {
            EdgeKind::Forward
        } else if self.postorder[head] == 0 {
            EdgeKind::Back
        } else {
            EdgeKind::Cross
        };
        self.record(edge, kind);
        Ok(())
    }

    fn retire(&mut self, head: usize, discovered: bool) {
        if discovered {
            self.postorder[head] = self.next_postorder;
            self.next_postorder += 1;
        }
        self.stack.pop();
        if self.stack.is_empty() {
            self.reseed();
        }
    }

    fn reseed(&mut self) {
        if self.min_unvisited < self.graph.node_count() {
            self.stack.push(Frame::seed(self.min_unvisited));
        }
    }

    fn advance_cursor(&mut self) {
        while self
            .preorder
            .get(self.min_unvisited)
            .is_some_and(|&number| number != 0)
        {
            self.min_unvisited += 1;
        }
    }

    fn is_visited(&self, node: usize) -> bool {
        self.preorder[node] != 0
    }

    fn record(&mut self, edge: usize, kind: EdgeKind) {
        if let Some(slot) = self.kinds.get_mut(edge) {
            *slot = Some(kind);
        }
        #[cfg(feature = "metrics")]
        metrics::counter!("dfs_edges_classified", "kind" => kind.as_str()).increment(1);
    }

    fn finish(self) -> Result<DepthFirstTraversal> {
        if let Some(index) = self.preorder.iter().position(|&number| number == 0) {
            return Err(GraphError::InvariantViolation {
                invariant: "every node is discovered",
                index,
            });
        }

        let kinds = self
            .kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| {
                kind.ok_or(GraphError::InvariantViolation {
                    invariant: "every edge is classified",
                    index,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DepthFirstTraversal {
            discovery: self.discovery,
            kinds,
            preorder: self.preorder,
            postorder: self.postorder,
            roots: self.roots,
        })
    }
}
