// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendPredicate - grows the path one node per round.
//!
//! Every path of MIN_PATTERN_LENGTH or more nodes is itself a pattern, so at
//! each round the predicate offers "stop here" as well as every legal next
//! node. Stopping moves on to the emit predicate; extending repeats this
//! predicate with the longer path.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::constants::NNODES;
use crate::geometry::Node;

/// Chooses between stopping and appending each legal candidate.
///
/// # Choices
///
/// When the path is complete (at least MIN_PATTERN_LENGTH nodes):
/// - Choice 0 → stop; the current path is emitted
/// - Choice k → append the k-th candidate (1-based)
///
/// Otherwise choice k appends the (k+1)-th candidate. Trying "stop" first
/// emits every pattern before its extensions.
///
/// Candidates are cached per path length: on retry the trail has restored
/// the path to the length it had when `try_pred` ran.
#[derive(Debug)]
pub struct ExtendPredicate {
    candidates: Vec<Vec<Node>>,
}

impl ExtendPredicate {
    pub fn new() -> Self {
        Self {
            candidates: (0..=NNODES).map(|_| Vec::with_capacity(NNODES)).collect(),
        }
    }
}

impl Default for ExtendPredicate {
    fn default() -> Self {
        Self::new()
    }
}

impl Predicate for ExtendPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let depth = ctx.path.len();
        let candidates = &mut self.candidates[depth];
        ctx.fill_candidates(candidates);

        let stop = usize::from(ctx.path.is_complete());
        match stop + candidates.len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let stop = usize::from(ctx.path.is_complete());
        if choice < stop {
            return PredicateResult::Success;
        }

        let node = self.candidates[ctx.path.len()][choice - stop];
        ctx.push_node(node);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Extend"
    }
}
