// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the unlock grid.
//!
//! This module contains type-safe representations of:
//! - Node: a grid position (0..NNODES-1)
//! - NodeSet: bitset of nodes, used for neighbour tables and visited sets
//! - Pattern: a complete sequence of distinct nodes

pub mod constants;
pub mod node;
pub mod node_set;
pub mod pattern;

// Re-export for convenience
pub use constants::*;
pub use node::Node;
pub use node_set::NodeSet;
pub use pattern::{Pattern, PatternViolation};
