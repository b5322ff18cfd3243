// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - Tier 1 (MEMO): shared, immutable transition tables
//! - Tier 2 (DYNAMIC): the path under construction, tracked on the trail
//! - Statistics gathered during the search
//!
//! ```text
//! SearchContext {
//!     memo: &MemoizedData,   // Tier 1: immutable, shared
//!     trail: Trail,          // Tier 2: mutable, owned
//!     path: DynamicPath,     // Tier 2: mutable, owned
//!     statistics: Statistics,
//! }
//! ```

use crate::geometry::Node;
use crate::memo::MemoizedData;
use crate::state::{Counters, DynamicPath, Statistics};
use crate::trail::{Trail, TrailedRegistry};

#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: &'static MemoizedData,
    /// Undo log for backtracking (Tier 2)
    pub trail: Trail,
    /// The path under construction (Tier 2)
    pub path: DynamicPath,
    /// Counters updated by predicates
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a new search context over the process-wide MEMO data.
    pub fn new() -> Self {
        Self::with_memo(MemoizedData::shared())
    }

    /// Create a search context with specific MEMO data.
    pub fn with_memo(memo: &'static MemoizedData) -> Self {
        let mut registry = TrailedRegistry::new();
        Self {
            memo,
            trail: Trail::new(),
            path: DynamicPath::new(&mut registry),
            statistics: Statistics::new(),
        }
    }

    /// Append a node to the path (trail-tracked).
    pub fn push_node(&mut self, node: Node) {
        self.path.push(&mut self.trail, node);
        self.statistics.increment_counter(Counters::Extensions);
    }

    /// Undo every path change made since `checkpoint`.
    ///
    /// # Panics
    ///
    /// Panics if the trail holds an ID that the path does not own.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let path = &mut self.path;
        self.trail.rewind_to(checkpoint, |id, old_value| {
            let restored = path.restore(id, old_value);
            assert!(restored, "Trail entry {} has no owner", id);
        });
    }

    /// Replace `out` with the legal next nodes from the current tail, in
    /// candidate order. Leaves `out` empty when the path is empty.
    pub fn fill_candidates(&self, out: &mut Vec<Node>) {
        out.clear();
        if let Some(tail) = self.path.tail() {
            out.extend(
                self.memo
                    .transitions
                    .candidates(tail, self.path.visited()),
            );
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
