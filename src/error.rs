// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for pattern enumeration.

use crate::geometry::PatternViolation;
use thiserror::Error;

/// Result type for enumeration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating and writing patterns.
#[derive(Debug, Error)]
pub enum Error {
    /// The enumerated total disagrees with the published count.
    #[error("Self-test failed: enumerated {actual} patterns, expected {expected}")]
    SelfTestFailure { expected: u64, actual: u64 },

    /// The count for one pattern length disagrees with the known distribution.
    #[error("Self-test failed: {actual} patterns of length {length}, expected {expected}")]
    LengthCountMismatch {
        length: usize,
        expected: u64,
        actual: u64,
    },

    /// A sampled transition does not behave as the grid rules require.
    #[error("Transition check failed: {0}")]
    TransitionCheckFailure(String),

    /// A node sequence is not a valid pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] PatternViolation),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
