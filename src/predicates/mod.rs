// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The enumeration program is:
//!
//! ```text
//! Start (9 choices) → Extend (one round per node) → Emit → Suspend | Fail
//! ```
//!
//! Ending in `SuspendPredicate` hands each pattern to the caller as it is
//! found; ending in `FailPredicate` runs the whole search for its
//! statistics alone.
//!
//! # Organization
//!
//! - `start`: StartPredicate, choosing the first node
//! - `extend`: ExtendPredicate, stopping or appending a legal node
//! - Built-in predicates: `EmitPredicate`, `FailPredicate`, `SuspendPredicate`

pub mod extend;
pub mod start;

pub use extend::ExtendPredicate;
pub use start::StartPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Counts the current path as an emitted pattern.
#[derive(Debug)]
pub struct EmitPredicate;

impl Predicate for EmitPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        debug_assert!(ctx.path.is_complete());
        ctx.statistics.record_pattern(ctx.path.len());
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Emit"
    }
}

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Forces backtracking into every remaining choice, so a program ending
/// here explores the whole search space.
///
/// # Example
///
/// ```
/// use lock_patterns::engine::EngineBuilder;
/// use lock_patterns::predicates::{FailPredicate, StartPredicate};
/// use lock_patterns::state::Counters;
/// use lock_patterns::context::SearchContext;
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(StartPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::Starts), 9);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Pauses the search, returning control to the caller.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
