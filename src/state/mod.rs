// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on trail).
//!
//! - The path under construction and its visited set
//! - Search statistics (not trailed; they only ever grow)
//!
//! All path modifications are tracked on the trail for O(1) backtracking.

pub mod path;
pub mod statistics;

pub use path::DynamicPath;
pub use statistics::{Counters, Statistics};
