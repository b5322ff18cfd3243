// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern enumeration.
//!
//! [`enumerate`] yields every valid pattern lazily, one engine suspension
//! per pattern. [`count_patterns`] runs the same program to exhaustion and
//! only keeps the counts.
//!
//! # Example
//!
//! ```
//! use lock_patterns::enumerator::enumerate;
//!
//! let first: Vec<String> = enumerate().take(3).map(|p| p.to_string()).collect();
//! assert_eq!(first, vec!["0125", "01254", "012543"]);
//! ```

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::geometry::constants::MAX_PATTERN_LENGTH;
use crate::geometry::Pattern;
use crate::predicates::{
    EmitPredicate, ExtendPredicate, FailPredicate, StartPredicate, SuspendPredicate,
};
use crate::state::Statistics;
use std::iter::FusedIterator;

/// The shared prefix of every enumeration program.
fn pattern_program() -> EngineBuilder {
    EngineBuilder::new()
        .add(Box::new(StartPredicate))
        .add(Box::new(ExtendPredicate::new()))
        .add(Box::new(EmitPredicate))
}

/// Lazy iterator over every valid pattern.
///
/// Patterns come in depth-first order: start nodes ascending, each pattern
/// before its extensions, candidates in [`TransitionMemo`] order.
///
/// [`TransitionMemo`]: crate::memo::TransitionMemo
#[derive(Debug)]
pub struct Patterns {
    engine: Option<SearchEngine>,
    ctx: SearchContext,
}

impl Patterns {
    fn new() -> Self {
        let engine = pattern_program()
            .terminal(Box::new(SuspendPredicate))
            .build();
        Self {
            engine: Some(engine),
            ctx: SearchContext::new(),
        }
    }

    /// Statistics for the patterns produced so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for Patterns {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        self.engine.as_ref()?;
        self.ctx.path.pattern()
    }
}

impl FusedIterator for Patterns {}

/// Enumerate every valid pattern of length 4..=9.
///
/// Each call starts a fresh, deterministic search.
pub fn enumerate() -> Patterns {
    Patterns::new()
}

/// Pattern totals, overall and per length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCounts {
    by_length: [u64; MAX_PATTERN_LENGTH + 1],
}

impl PatternCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pattern: &Pattern) {
        self.by_length[pattern.len()] += 1;
    }

    pub fn total(&self) -> u64 {
        self.by_length.iter().sum()
    }

    /// Number of patterns with exactly `length` nodes.
    pub fn of_length(&self, length: usize) -> u64 {
        self.by_length.get(length).copied().unwrap_or(0)
    }

    /// Counts indexed by length.
    pub fn by_length(&self) -> &[u64; MAX_PATTERN_LENGTH + 1] {
        &self.by_length
    }
}

impl From<&Statistics> for PatternCounts {
    fn from(statistics: &Statistics) -> Self {
        Self {
            by_length: *statistics.patterns_by_length(),
        }
    }
}

impl<'a> FromIterator<&'a Pattern> for PatternCounts {
    fn from_iter<I: IntoIterator<Item = &'a Pattern>>(iter: I) -> Self {
        let mut counts = Self::new();
        for pattern in iter {
            counts.record(pattern);
        }
        counts
    }
}

/// Count every valid pattern without materialising them.
pub fn count_patterns() -> PatternCounts {
    let mut ctx = SearchContext::new();
    let engine = pattern_program()
        .terminal(Box::new(FailPredicate))
        .build();
    let suspended = engine.search(&mut ctx);
    debug_assert!(suspended.is_none());
    PatternCounts::from(&ctx.statistics)
}
