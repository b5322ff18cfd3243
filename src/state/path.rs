// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The path under construction.
//!
//! The path is a fixed array of nodes plus a trailed length and a trailed
//! visited set. Slots beyond the length are stale and never read, so only
//! the length and the visited set need restoring on backtrack.

use crate::geometry::constants::{MIN_PATTERN_LENGTH, NNODES};
use crate::geometry::{Node, NodeSet, Pattern};
use crate::trail::{Trail, Trailed, TrailedRegistry};

/// Mutable path state (trail-tracked).
#[derive(Debug)]
pub struct DynamicPath {
    nodes: [Node; NNODES],
    length: Trailed<u8>,
    visited: Trailed<NodeSet>,
}

impl DynamicPath {
    pub fn new(registry: &mut TrailedRegistry) -> Self {
        Self {
            nodes: [Node::default(); NNODES],
            length: registry.register(0u8),
            visited: registry.register(NodeSet::empty()),
        }
    }

    /// Nodes placed so far, in drawing order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes[..self.len()]
    }

    pub fn len(&self) -> usize {
        self.length.get() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recently placed node.
    pub fn tail(&self) -> Option<Node> {
        self.nodes().last().copied()
    }

    /// The visited set: exactly the nodes of the path.
    pub fn visited(&self) -> NodeSet {
        self.visited.get()
    }

    /// True when the path is long enough to be emitted as a pattern.
    pub fn is_complete(&self) -> bool {
        self.len() >= MIN_PATTERN_LENGTH
    }

    /// Append a node, recording the change on the trail.
    ///
    /// The caller is responsible for legality; the path itself only
    /// guards against overflowing the grid.
    ///
    /// # Panics
    ///
    /// Panics if the path already holds every node.
    pub fn push(&mut self, trail: &mut Trail, node: Node) {
        let len = self.len();
        assert!(len < NNODES, "Path overflow: already holds {} nodes", len);
        debug_assert!(!self.visited().contains(node));

        self.nodes[len] = node;
        self.length.set(trail, (len + 1) as u8);
        let mut visited = self.visited();
        visited.insert(node);
        self.visited.set(trail, visited);
    }

    /// Snapshot the path as a pattern, if it is long enough.
    pub fn pattern(&self) -> Option<Pattern> {
        if self.is_complete() {
            Some(Pattern::from_legal_path(self.nodes()))
        } else {
            None
        }
    }

    /// Restore a trailed field. Returns false if `id` is not one of ours.
    pub fn restore(&mut self, id: usize, old_value: u64) -> bool {
        if id == self.length.id() {
            self.length.restore(old_value);
            true
        } else if id == self.visited.id() {
            self.visited.restore(old_value);
            true
        } else {
            false
        }
    }
}
