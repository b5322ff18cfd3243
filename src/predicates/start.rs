// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StartPredicate - chooses the first node of the pattern.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::constants::NNODES;
use crate::geometry::Node;
use crate::state::Counters;

/// Chooses each grid node in turn as the start of the pattern.
///
/// # Choices
///
/// Choice i places node i, so start nodes are tried in ascending order.
#[derive(Debug)]
pub struct StartPredicate;

impl Predicate for StartPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(NNODES)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.statistics.increment_counter(Counters::Starts);
        ctx.push_node(Node::new(choice as u8));
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Start"
    }
}
