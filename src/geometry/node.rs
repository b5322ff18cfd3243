// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Node type for grid positions.
//!
//! A node is one of the nine dots of the unlock grid, numbered 0..9 row by row.

use crate::geometry::constants::{GRID_SIZE, NNODES};
use std::fmt;

/// A grid position in the range 0..NNODES.
///
/// This is a newtype wrapper to keep node numbers apart from lengths,
/// counts, and other small integers used during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Node(u8);

impl Node {
    /// Create a new node, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NNODES`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < NNODES, "Node out of range: {}", value);
        Self(value)
    }

    /// Try to create a new node, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NNODES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse a node from its digit character ('0'..='8').
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::try_new(d as u8))
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the node as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Row on the grid (0 is the top row).
    pub fn row(self) -> usize {
        self.as_usize() / GRID_SIZE
    }

    /// Column on the grid (0 is the left column).
    pub fn col(self) -> usize {
        self.as_usize() % GRID_SIZE
    }

    /// Node at the given row and column.
    pub fn at(row: usize, col: usize) -> Self {
        Self::new((row * GRID_SIZE + col) as u8)
    }

    /// Squared Euclidean distance between two nodes, in grid units.
    pub fn distance_squared(self, other: Node) -> usize {
        let dr = self.row().abs_diff(other.row());
        let dc = self.col().abs_diff(other.col());
        dr * dr + dc * dc
    }

    /// The digit used for this node in pattern strings.
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Iterate over every node on the grid in ascending order.
    pub fn all() -> impl Iterator<Item = Node> {
        (0..NNODES as u8).map(Node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
