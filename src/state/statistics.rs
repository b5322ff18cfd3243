// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the predicates
//! as the search runs.

use crate::geometry::constants::MAX_PATTERN_LENGTH;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Start nodes tried.
    Starts,
    /// Nodes appended to a path.
    Extensions,
    /// Complete patterns emitted.
    Patterns,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    patterns_by_length: [u64; MAX_PATTERN_LENGTH + 1],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one emitted pattern of the given length.
    pub fn record_pattern(&mut self, length: usize) {
        self.increment_counter(Counters::Patterns);
        self.patterns_by_length[length] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Emitted patterns, indexed by length.
    pub fn patterns_by_length(&self) -> &[u64; MAX_PATTERN_LENGTH + 1] {
        &self.patterns_by_length
    }
}
