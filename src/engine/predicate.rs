// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a step of the search program. Predicates can succeed, fail,
//! offer choices, repeat for another round, or suspend.
//!
//! # Example
//!
//! ```
//! use lock_patterns::engine::{Predicate, PredicateResult};
//! use lock_patterns::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct TwoWays;
//!
//! impl Predicate for TwoWays {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         if choice < 2 {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWays"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Lets a single predicate run repeatedly, e.g. once per appended node.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack.
    Failure,

    /// Predicate has n choices; the engine calls retry_pred for each in 0..n.
    Choices(usize),

    /// Pause execution. The engine returns control with state preserved.
    Suspend,
}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first reaching the predicate
/// 2. If Success: engine advances to the next predicate
/// 3. If Choices(n): engine calls `retry_pred` for choice 0, then on each
///    backtrack for the next choice, until all n are spent
/// 4. If Failure: engine backtracks to the most recent open choice
///
/// # Trail Integration
///
/// Predicates change the context through trail-tracked methods such as
/// `SearchContext::push_node`. The engine rewinds the trail before each
/// retry and on backtrack, so a predicate always sees the state it left
/// when it returned Choices.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// May not return Choices or Suspend.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logs and panics. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A predicate that ends a search program: it never returns Success.
///
/// `EngineBuilder::terminal` only accepts these, so every built program
/// ends in FAIL or SUSPEND.
pub trait TerminalPredicate: Predicate {}
