// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the pattern search.
//!
//! Every change to dynamic search state is recorded as `(id, old_value)`.
//! Backtracking rewinds the trail to a checkpoint (a trail length), handing
//! each old value back to its owner in reverse order.

pub mod trailed;

pub use trailed::{TrailValue, Trailed, TrailedRegistry};

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    /// Identifier of the value being tracked
    id: usize,
    /// The value before the change
    old_value: u64,
}

/// The trail of state changes.
///
/// Each SearchContext owns its own trail. Checkpoints are plain trail
/// lengths, taken with [`Trail::len`] and restored with [`Trail::rewind_to`].
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Two trailed values change per appended node, and a path never
    /// exceeds the grid, so this is generous.
    const MAX_SIZE: usize = 64;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::MAX_SIZE),
        }
    }

    /// Record a state change in the trail.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search).
    pub(crate) fn record_change(&mut self, id: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { id, old_value });
    }

    /// Undo every change made since `checkpoint`, newest first.
    ///
    /// `restore` is called with the id and old value of each undone change.
    /// Rewinding to a checkpoint at or beyond the current length does nothing.
    pub fn rewind_to(&mut self, checkpoint: usize, mut restore: impl FnMut(usize, u64)) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                restore(entry.id, entry.old_value);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_restores_newest_first() {
        let mut trail = Trail::new();
        trail.record_change(1, 10);
        let checkpoint = trail.len();
        trail.record_change(2, 20);
        trail.record_change(2, 30);

        let mut undone = Vec::new();
        trail.rewind_to(checkpoint, |id, old| undone.push((id, old)));
        assert_eq!(undone, vec![(2, 30), (2, 20)]);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();
        trail.record_change(1, 10);
        let outer = trail.len();
        trail.record_change(2, 20);
        let inner = trail.len();
        trail.record_change(3, 30);

        trail.rewind_to(inner, |_, _| {});
        assert_eq!(trail.len(), 2);
        trail.rewind_to(outer, |_, _| {});
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_rewind_beyond_length_is_noop() {
        let mut trail = Trail::new();
        trail.record_change(1, 10);
        let mut calls = 0;
        trail.rewind_to(5, |_, _| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        for i in 0..Trail::MAX_SIZE + 1 {
            trail.record_change(i, 0);
        }
    }
}
