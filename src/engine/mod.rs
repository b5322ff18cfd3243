// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a resumable backtracking engine that runs
//! predicates in sequence, WAM style. The engine coordinates with the trail
//! to restore the context on backtracking.
//!
//! # Architecture
//!
//! The engine keeps a stack of predicate activations. Each entry tracks:
//! - Which predicate is executing, and in which round
//! - Its mode: freshly called, iterating over choices, or done
//! - The trail checkpoint to rewind to before running it
//!
//! Execution:
//! 1. Call `try_pred(round)` on the predicate at the top of the stack
//! 2. If Success: push the next predicate
//! 3. If SuccessSamePredicate: push the same predicate with round + 1
//! 4. If Choices(n): call `retry_pred(round, choice)` for choice in 0..n,
//!    rewinding the trail before each one
//! 5. If Failure: pop and backtrack into the most recent open choice
//! 6. If Suspend: return control to the caller; the next `search` call
//!    backtracks from the suspension point
//!
//! A deterministic success leaves no alternatives: backtracking into it
//! simply pops it.
//!
//! # Example
//!
//! ```
//! use lock_patterns::engine::EngineBuilder;
//! use lock_patterns::predicates::{StartPredicate, SuspendPredicate};
//! use lock_patterns::context::SearchContext;
//!
//! let mut ctx = SearchContext::new();
//! let mut engine = Some(
//!     EngineBuilder::new()
//!         .add(Box::new(StartPredicate))
//!         .terminal(Box::new(SuspendPredicate))
//!         .build(),
//! );
//!
//! // One suspension per start node.
//! let mut starts = Vec::new();
//! while let Some(e) = engine.take() {
//!     engine = e.search(&mut ctx);
//!     if engine.is_some() {
//!         starts.extend(ctx.path.tail());
//!     }
//! }
//! assert_eq!(starts.len(), 9);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::debug;

/// Initial capacity of the predicate stack.
///
/// One start entry, one extend entry per appended node, emit and terminal.
const STACK_CAPACITY: usize = 16;

/// Where a stack entry is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// try_pred has not run yet.
    Call,
    /// Iterating choices; `next` is the next choice to retry.
    Choice { next: usize, total: usize },
    /// Succeeded deterministically (or suspended); pop on backtrack.
    Done,
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    predicate_index: usize,
    round: usize,
    mode: Mode,
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    predicates: Vec<Box<dyn Predicate>>,
    stack: Vec<StackEntry>,

    /// Trail length when the search started; restored on exhaustion.
    base_checkpoint: usize,
    started: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends in a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            base_checkpoint: 0,
            started: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; call `search` again to resume
    /// - `None` if exhausted; the context's path is rewound to where the
    ///   search began
    ///
    /// Results are delivered through side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the program runs past its last predicate, or if a
    /// `retry_pred` returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if !self.started {
            self.started = true;
            self.base_checkpoint = ctx.trail.len();
            if self.predicates.is_empty() {
                return None;
            }
            self.push_entry(0, 0, ctx);
        }

        loop {
            let Some(top) = self.stack.len().checked_sub(1) else {
                ctx.rewind_to(self.base_checkpoint);
                debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            let entry = &self.stack[top];
            let predicate_index = entry.predicate_index;
            let round = entry.round;
            let checkpoint = entry.trail_checkpoint;
            let mode = entry.mode;

            match mode {
                Mode::Done => {
                    self.stack.pop();
                }
                Mode::Call => {
                    ctx.rewind_to(checkpoint);
                    self.try_count += 1;
                    let result = self.predicates[predicate_index].try_pred(ctx, round);

                    match result {
                        PredicateResult::Success => {
                            self.stack[top].mode = Mode::Done;
                            self.push_entry(predicate_index + 1, 0, ctx);
                        }
                        PredicateResult::SuccessSamePredicate => {
                            self.stack[top].mode = Mode::Done;
                            self.push_entry(predicate_index, round + 1, ctx);
                        }
                        PredicateResult::Failure => {
                            self.stack.pop();
                        }
                        PredicateResult::Choices(total) => {
                            let entry = &mut self.stack[top];
                            entry.mode = Mode::Choice { next: 0, total };
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                        PredicateResult::Suspend => {
                            self.stack[top].mode = Mode::Done;
                            return Some(self);
                        }
                    }
                }
                Mode::Choice { next, total } => {
                    if next >= total {
                        self.stack.pop();
                        continue;
                    }

                    ctx.rewind_to(checkpoint);
                    self.stack[top].mode = Mode::Choice {
                        next: next + 1,
                        total,
                    };
                    self.retry_count += 1;
                    let result = self.predicates[predicate_index].retry_pred(ctx, round, next);

                    match result {
                        PredicateResult::Success => {
                            self.push_entry(predicate_index + 1, 0, ctx);
                        }
                        PredicateResult::SuccessSamePredicate => {
                            self.push_entry(predicate_index, round + 1, ctx);
                        }
                        PredicateResult::Failure => {
                            // Try next choice (loop continues)
                        }
                        PredicateResult::Choices(_) | PredicateResult::Suspend => {
                            panic!(
                                "{}::retry_pred returned invalid result: {:?}",
                                self.predicates[predicate_index].name(),
                                result
                            );
                        }
                    }
                }
            }
        }
    }

    /// Push a fresh activation of `predicate_index`.
    ///
    /// Panics if we've run off the end of the program: valid programs end
    /// with a FAIL or SUSPEND predicate.
    fn push_entry(&mut self, predicate_index: usize, round: usize, ctx: &SearchContext) {
        if predicate_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry {
            predicate_index,
            round,
            mode: Mode::Call,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Returns (try_count, retry_count) accumulated over all `search` calls.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for search programs.
///
/// ```
/// use lock_patterns::engine::EngineBuilder;
/// use lock_patterns::predicates::{FailPredicate, StartPredicate};
/// use lock_patterns::context::SearchContext;
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(StartPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<P: TerminalPredicate + 'static>(mut self, predicate: Box<P>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A program that ends in a terminal predicate, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Node;

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that always fails.
    #[derive(Debug)]
    struct AlwaysFail;

    impl Predicate for AlwaysFail {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Failure
        }
    }

    impl TerminalPredicate for AlwaysFail {}

    /// Test predicate that suspends.
    #[derive(Debug)]
    struct Suspend;

    impl Predicate for Suspend {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Suspend
        }
    }

    impl TerminalPredicate for Suspend {}

    /// Offers `count` choices, pushing node `offset + choice` for each.
    #[derive(Debug)]
    struct PushNode {
        offset: u8,
        count: usize,
    }

    impl PushNode {
        fn new(offset: u8, count: usize) -> Box<Self> {
            Box::new(Self { offset, count })
        }
    }

    impl Predicate for PushNode {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.count)
        }

        fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            ctx.push_node(Node::new(self.offset + choice as u8));
            PredicateResult::Success
        }
    }

    /// Runs for `rounds` rounds, then succeeds.
    #[derive(Debug)]
    struct Rounds(usize);

    impl Predicate for Rounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            if round < self.0 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(Suspend))
            .build();

        let engine = engine.search(&mut ctx).expect("suspended");
        assert_eq!(engine.statistics(), (2, 0));

        // Resuming backtracks through the deterministic success and exhausts.
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::new();
        let engine = SearchEngine::new(vec![Box::new(AlwaysFail)]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = SearchContext::new();
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = SearchContext::new();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }

    #[test]
    fn test_choices_restore_state_between_retries() {
        let mut ctx = SearchContext::new();
        let mut engine = Some(
            EngineBuilder::new()
                .add(PushNode::new(0, 3))
                .terminal(Box::new(Suspend))
                .build(),
        );

        let mut seen = Vec::new();
        while let Some(e) = engine.take() {
            engine = e.search(&mut ctx);
            if engine.is_some() {
                seen.push(ctx.path.nodes().to_vec());
            }
        }
        assert_eq!(
            seen,
            vec![vec![Node::new(0)], vec![Node::new(1)], vec![Node::new(2)]]
        );
        // Exhaustion rewinds to the starting state.
        assert!(ctx.path.is_empty());
    }

    #[test]
    fn test_nested_choices_enumerate_product() {
        let mut ctx = SearchContext::new();
        let mut engine = Some(
            EngineBuilder::new()
                .add(PushNode::new(0, 2))
                .add(PushNode::new(2, 4))
                .terminal(Box::new(Suspend))
                .build(),
        );

        let mut count = 0;
        while let Some(e) = engine.take() {
            engine = e.search(&mut ctx);
            if engine.is_some() {
                assert_eq!(ctx.path.len(), 2);
                count += 1;
            }
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn test_multi_round_predicate() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(Rounds(3)))
            .terminal(Box::new(Suspend))
            .build();

        let engine = engine.search(&mut ctx).expect("suspended");
        // Rounds(0, 1, 2, 3) + Suspend
        assert_eq!(engine.statistics(), (5, 0));
    }

    #[test]
    fn test_backtracking_exhausts_choices() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(PushNode::new(0, 3))
            .terminal(Box::new(AlwaysFail))
            .build();

        assert!(engine.search(&mut ctx).is_none());
    }
}
