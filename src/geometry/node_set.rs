// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! NodeSet type for representing sets of grid nodes as bitsets.
//!
//! A NodeSet is used both for the precomputed neighbour tables and for the
//! set of nodes already visited by the pattern under construction.
//!
//! # Examples
//!
//! ```
//! use lock_patterns::geometry::{Node, NodeSet};
//!
//! let mut set = NodeSet::empty();
//! set.insert(Node::new(0));
//! set.insert(Node::new(4));
//! set.insert(Node::new(8));
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "{048}");
//!
//! let nodes: Vec<u8> = set.iter().map(|n| n.value()).collect();
//! assert_eq!(nodes, vec![0, 4, 8]);
//! ```

use crate::geometry::{constants::NNODES, Node};
use std::fmt;

/// A set of nodes represented as a bitset.
///
/// Bit i (counting from LSB) is set if node i is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeSet(u16);

impl NodeSet {
    /// Create an empty node set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a node set containing every node on the grid.
    pub const fn full() -> Self {
        Self((1 << NNODES) - 1)
    }

    /// Create a node set from a slice of nodes.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut set = Self::empty();
        for &node in nodes {
            set.insert(node);
        }
        set
    }

    /// Create a node set from a raw bit value, discarding bits above the grid.
    pub const fn from_bits(bits: u64) -> Self {
        Self((bits & ((1 << NNODES) - 1)) as u16)
    }

    pub fn contains(self, node: Node) -> bool {
        (self.0 >> node.value()) & 1 != 0
    }

    pub fn insert(&mut self, node: Node) {
        self.0 |= 1 << node.value();
    }

    pub fn remove(&mut self, node: Node) {
        self.0 &= !(1 << node.value());
    }

    /// Get the number of nodes in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Nodes in both sets.
    pub fn intersection(self, other: NodeSet) -> NodeSet {
        Self(self.0 & other.0)
    }

    /// Nodes in `self` but not in `other`.
    pub fn difference(self, other: NodeSet) -> NodeSet {
        Self(self.0 & !other.0)
    }

    /// True if every node of `self` is also in `other`.
    pub fn is_subset(self, other: NodeSet) -> bool {
        self.difference(other).is_empty()
    }

    /// Get the underlying bitset value (u64 for trail compatibility).
    pub fn bits(self) -> u64 {
        u64::from(self.0)
    }

    /// Iterate over all nodes in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Node> {
        NodeSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over nodes in a NodeSet.
struct NodeSetIter {
    bits: u16,
    index: u8,
}

impl Iterator for NodeSetIter {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NNODES as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Node::new(idx));
            }
        }
        None
    }
}

impl fmt::Display for NodeSet {
    /// Format a node set as "{048}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for node in self.iter() {
            write!(f, "{}", node)?;
        }
        write!(f, "}}")
    }
}

impl From<&[Node]> for NodeSet {
    fn from(nodes: &[Node]) -> Self {
        Self::from_nodes(nodes)
    }
}

impl FromIterator<Node> for NodeSet {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut set = Self::empty();
        for node in iter {
            set.insert(node);
        }
        set
    }
}
