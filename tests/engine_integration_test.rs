// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Backtracks through choices, restoring the path via the trail
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends and resumes
//! - Leaves the context clean on exhaustion

mod common;

use common::reference_path_counts;
use lock_patterns::context::SearchContext;
use lock_patterns::engine::{EngineBuilder, Predicate, PredicateResult};
use lock_patterns::geometry::Node;
use lock_patterns::predicates::{
    EmitPredicate, ExtendPredicate, FailPredicate, StartPredicate, SuspendPredicate,
};
use lock_patterns::state::Counters;

/// Fails unless the path starts on a corner.
#[derive(Debug)]
struct CornerStartPredicate;

impl Predicate for CornerStartPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.path.tail().map(Node::value) {
            Some(0 | 2 | 6 | 8) => PredicateResult::Success,
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "CornerStart"
    }
}

#[test]
fn test_start_suspends_once_per_node() {
    let mut ctx = SearchContext::new();
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(StartPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut starts = Vec::new();
    while let Some(e) = engine.take() {
        engine = e.search(&mut ctx);
        if engine.is_some() {
            assert_eq!(ctx.path.len(), 1);
            starts.extend(ctx.path.tail().map(Node::value));
        }
    }
    assert_eq!(starts, (0..9).collect::<Vec<u8>>());
    assert!(ctx.path.is_empty());
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_full_search_statistics() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(StartPredicate))
        .add(Box::new(ExtendPredicate::new()))
        .add(Box::new(EmitPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());

    let reference = reference_path_counts();
    let paths: u64 = reference[1..].iter().sum();
    let patterns: u64 = reference[4..].iter().sum();
    assert_eq!(ctx.statistics.get(Counters::Starts), 9);
    assert_eq!(ctx.statistics.get(Counters::Extensions), paths);
    assert_eq!(ctx.statistics.get(Counters::Patterns), patterns);
    assert_eq!(&ctx.statistics.patterns_by_length()[4..], &reference[4..]);
    assert!(ctx.path.is_empty());
}

#[test]
fn test_custom_predicate_prunes_search() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(StartPredicate))
        .add(Box::new(CornerStartPredicate))
        .add(Box::new(ExtendPredicate::new()))
        .add(Box::new(EmitPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());

    // Each corner starts the same number of patterns by symmetry.
    let mut per_corner = SearchContext::new();
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(StartPredicate))
            .add(Box::new(ExtendPredicate::new()))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );
    let mut from_zero = 0u64;
    while let Some(e) = engine.take() {
        engine = e.search(&mut per_corner);
        if engine.is_some() && per_corner.path.nodes()[0] == Node::new(0) {
            from_zero += 1;
        }
    }
    assert_eq!(ctx.statistics.get(Counters::Patterns), 4 * from_zero);
}

#[test]
fn test_suspended_path_is_the_pattern() {
    let mut ctx = SearchContext::new();
    let engine = EngineBuilder::new()
        .add(Box::new(StartPredicate))
        .add(Box::new(ExtendPredicate::new()))
        .add(Box::new(EmitPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let first = ctx.path.pattern().unwrap();
    assert_eq!(first.to_string(), "0125");

    // Resuming backtracks out of the suspension and extends the same path.
    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.path.pattern().unwrap().to_string(), "01254");

    let (tries, retries) = engine.statistics();
    assert!(tries > 0);
    assert!(retries > 0);
}

#[test]
#[should_panic(expected = "Invalid predicate sequence")]
fn test_program_without_terminal_panics() {
    use lock_patterns::engine::SearchEngine;

    let mut ctx = SearchContext::new();
    let engine = SearchEngine::new(vec![Box::new(StartPredicate)]);
    engine.search(&mut ctx);
}
