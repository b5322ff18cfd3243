// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the unlock grid.
//!
//! The grid is fixed at 3×3. Nodes are numbered row by row:
//!
//! ```text
//!    0    1    2
//!
//!    3    4    5
//!
//!    6    7    8
//! ```

/// Width (and height) of the square grid.
pub const GRID_SIZE: usize = 3;

/// Number of nodes on the grid.
pub const NNODES: usize = GRID_SIZE * GRID_SIZE;

/// Shortest pattern Android accepts.
pub const MIN_PATTERN_LENGTH: usize = 4;

/// Longest possible pattern: every node used once.
pub const MAX_PATTERN_LENGTH: usize = NNODES;

/// Total number of valid patterns of length 4..=9.
///
/// Matches Uellenbeck et al., "Quantifying the Security of Graphical
/// Passwords: The Case of Android Unlock Patterns".
pub const EXPECTED_PATTERN_COUNT: u64 = 389_112;

/// Known number of valid patterns of each length, indexed by length.
///
/// Entries below [`MIN_PATTERN_LENGTH`] are zero because shorter sequences
/// are never emitted.
pub const EXPECTED_COUNTS_BY_LENGTH: [u64; MAX_PATTERN_LENGTH + 1] =
    [0, 0, 0, 0, 1_624, 7_152, 26_016, 72_912, 140_704, 140_704];
