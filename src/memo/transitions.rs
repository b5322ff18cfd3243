// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transition MEMO data: which node may follow which.
//!
//! Three neighbour tables are computed from grid coordinates:
//!
//! - **Adjacency**: king-move neighbours (orthogonal and diagonal).
//! - **Linear**: every node sharing a straight 3-node line (row, column or
//!   main diagonal) with the source, near or far.
//! - **End-linear**: the far ends of those lines, reached by jumping over
//!   exactly one middle node.
//!
//! The tables overlap: end-linear ⊆ linear, end-linear ∩ adjacency = ∅, and
//! the rest of linear lies inside adjacency. Only the end-linear table and its
//! middle nodes constrain the search; the other two are kept for inspection
//! and for the startup self-test.
//!
//! # Transition rule
//!
//! From `from`, given the visited set `V`, a node `to` may come next iff
//! `to ∉ V` and, when `to` is an end-linear target of `from`, the middle node
//! between them is already in `V`. Moves with no grid node in between
//! (including knight moves such as 0 → 5) are always allowed.
//!
//! ```text
//!    0 ── 1 ── 2        0 → 2 needs 1 visited
//!    │ ╲  │  ╱ │        0 → 8 needs 4 visited
//!    3 ── 4 ── 5        0 → 5 is direct
//!    │ ╱  │  ╲ │
//!    6 ── 7 ── 8
//! ```

use crate::geometry::constants::{GRID_SIZE, NNODES};
use crate::geometry::{Node, NodeSet, PatternViolation};

/// The straight 3-node lines of the grid: rows, columns, both diagonals.
const LINES: [[u8; GRID_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Per-node neighbour table.
pub type NodeTable = [NodeSet; NNODES];

/// MEMO data for node-to-node transitions.
///
/// Computed once and shared read-only by every search context.
#[derive(Debug, Clone)]
pub struct TransitionMemo {
    /// King-move neighbours of each node.
    pub adjacent: NodeTable,

    /// Nodes sharing a straight grid line with each node.
    pub linear: NodeTable,

    /// Far ends of the straight lines through each node.
    pub end_linear: NodeTable,

    /// `middle[a][b]` is the node strictly between `a` and `b`, if any.
    middle: [[Option<Node>; NNODES]; NNODES],

    /// Other nodes ordered by how easy the move is to draw.
    ///
    /// Closer targets come first (orthogonal, diagonal, straight jump,
    /// knight move, diagonal jump); ties go to the lower node number. This
    /// only affects output order.
    candidate_order: [[Node; NNODES - 1]; NNODES],
}

impl TransitionMemo {
    /// Compute every transition table from grid coordinates.
    pub fn initialize() -> Self {
        let mut adjacent = [NodeSet::empty(); NNODES];
        let mut linear = [NodeSet::empty(); NNODES];
        let mut end_linear = [NodeSet::empty(); NNODES];
        let mut middle = [[None; NNODES]; NNODES];

        for from in Node::all() {
            for to in Node::all() {
                if from == to {
                    continue;
                }
                let dr = from.row().abs_diff(to.row());
                let dc = from.col().abs_diff(to.col());
                if dr <= 1 && dc <= 1 {
                    adjacent[from.as_usize()].insert(to);
                }
            }
        }

        for line in LINES {
            let [a, m, b] = line.map(Node::new);
            for (x, y) in [(a, m), (m, b), (a, b)] {
                linear[x.as_usize()].insert(y);
                linear[y.as_usize()].insert(x);
            }
            end_linear[a.as_usize()].insert(b);
            end_linear[b.as_usize()].insert(a);
            middle[a.as_usize()][b.as_usize()] = Some(m);
            middle[b.as_usize()][a.as_usize()] = Some(m);
        }

        let candidate_order = compute_candidate_order();

        Self {
            adjacent,
            linear,
            end_linear,
            middle,
            candidate_order,
        }
    }

    /// The node that must already be visited to move from `from` to `to`.
    ///
    /// `None` for direct moves.
    pub fn required_middle(&self, from: Node, to: Node) -> Option<Node> {
        self.middle[from.as_usize()][to.as_usize()]
    }

    /// Check whether `to` may follow `from` given the nodes visited so far.
    pub fn is_legal(&self, from: Node, to: Node, visited: NodeSet) -> bool {
        if from == to || visited.contains(to) {
            return false;
        }
        match self.required_middle(from, to) {
            Some(middle) => visited.contains(middle),
            None => true,
        }
    }

    /// Every node that may follow `from`, as a set.
    pub fn allowed_next(&self, from: Node, visited: NodeSet) -> NodeSet {
        Node::all()
            .filter(|&to| self.is_legal(from, to, visited))
            .collect()
    }

    /// Every node that may follow `from`, in candidate order.
    pub fn candidates(&self, from: Node, visited: NodeSet) -> impl Iterator<Item = Node> + '_ {
        self.candidate_order[from.as_usize()]
            .iter()
            .copied()
            .filter(move |&to| self.is_legal(from, to, visited))
    }

    /// Check the transition rule along a whole path, ignoring length limits.
    ///
    /// Reports the first repeated node or the first jump over an unvisited
    /// node, with the index of the offending node.
    pub fn check_path(&self, path: &[Node]) -> Result<(), PatternViolation> {
        let mut visited = NodeSet::empty();
        let mut previous: Option<Node> = None;

        for (position, &node) in path.iter().enumerate() {
            if visited.contains(node) {
                return Err(PatternViolation::RepeatedNode { node, position });
            }
            if let Some(from) = previous {
                if !self.is_legal(from, node, visited) {
                    if let Some(middle) = self.required_middle(from, node) {
                        return Err(PatternViolation::SkippedNode {
                            from,
                            to: node,
                            middle,
                            position,
                        });
                    }
                }
            }
            visited.insert(node);
            previous = Some(node);
        }
        Ok(())
    }
}

impl Default for TransitionMemo {
    fn default() -> Self {
        Self::initialize()
    }
}

/// For each node, the other nodes sorted by (distance², node number).
fn compute_candidate_order() -> [[Node; NNODES - 1]; NNODES] {
    let mut order = [[Node::default(); NNODES - 1]; NNODES];
    for from in Node::all() {
        let mut others: Vec<Node> = Node::all().filter(|&to| to != from).collect();
        others.sort_by_key(|&to| (from.distance_squared(to), to));
        order[from.as_usize()].copy_from_slice(&others);
    }
    order
}
