// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of Android 3×3 unlock patterns.
//!
//! A pattern is a sequence of 4 to 9 distinct grid nodes in which every
//! straight jump over a node passes only through nodes already visited.
//! There are 389,112 of them (Uellenbeck et al., "Quantifying the Security
//! of Graphical Passwords: The Case of Android Unlock Patterns").
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes during search:
//! - Adjacency, linear and end-linear neighbour tables
//! - The middle node of every straight jump
//! - Per-node candidate order
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - DynamicPath - the nodes drawn so far and their visited set
//!
//! # Search Algorithm
//!
//! A small predicate program drives a resumable backtracking engine:
//!
//! 1. **StartPredicate**: choose the first node (9 choices)
//! 2. **ExtendPredicate**: each round, either stop (once 4 nodes are drawn)
//!    or append a legal next node
//! 3. **EmitPredicate**: record the completed pattern
//! 4. **SuspendPredicate** hands it to the caller; **FailPredicate** instead
//!    backtracks straight into the next choice
//!
//! [`enumerate`] wraps the suspending program as a lazy iterator.
//!
//! # Example
//!
//! ```
//! use lock_patterns::{count_patterns, EXPECTED_PATTERN_COUNT};
//!
//! assert_eq!(count_patterns().total(), EXPECTED_PATTERN_COUNT);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod enumerator;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod output;
pub mod predicates;
pub mod run;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::OutputConfig;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use enumerator::{count_patterns, enumerate, PatternCounts, Patterns};
pub use error::{Error, Result};
pub use geometry::{Node, NodeSet, Pattern, PatternViolation, EXPECTED_PATTERN_COUNT};
pub use run::{run, RunSummary};
pub use trail::Trail;
