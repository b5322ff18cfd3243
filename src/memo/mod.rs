// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Everything the search looks up but never changes:
//! - Adjacency, linear and end-linear neighbour tables
//! - The middle node of every straight jump
//! - The per-node candidate order
//!
//! The data is built once per process and shared by reference; see
//! [`MemoizedData::shared`].

pub mod transitions;

pub use transitions::{NodeTable, TransitionMemo};

use std::sync::OnceLock;
use tracing::debug;

static SHARED: OnceLock<MemoizedData> = OnceLock::new();

/// Immutable precomputed data.
///
/// Small enough (a few hundred bytes) that cloning is cheap, but normally
/// accessed through the process-wide instance.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Node-to-node transition tables.
    pub transitions: TransitionMemo,
}

impl MemoizedData {
    /// Compute all MEMO structures.
    pub fn new() -> Self {
        let transitions = TransitionMemo::initialize();
        debug!(
            jumps = transitions
                .end_linear
                .iter()
                .map(|set| set.len())
                .sum::<usize>(),
            "transition tables initialized"
        );
        Self { transitions }
    }

    /// The process-wide MEMO data, built on first use.
    pub fn shared() -> &'static MemoizedData {
        SHARED.get_or_init(MemoizedData::new)
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new()
    }
}
