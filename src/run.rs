// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The whole program: self-test, enumerate, check, write.

use crate::config::OutputConfig;
use crate::enumerator::{enumerate, PatternCounts};
use crate::error::Result;
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
use crate::geometry::Pattern;
use crate::memo::MemoizedData;
use crate::output::write_patterns;
use crate::self_test::{check_counts, check_transitions};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub counts: PatternCounts,
    pub path: PathBuf,
    pub lines_written: u64,
}

/// Enumerate every pattern and write them to `config.path`.
///
/// Nothing is written unless every self-test passes.
pub fn run(config: &OutputConfig) -> Result<RunSummary> {
    let memo = MemoizedData::shared();
    if let Err(e) = check_transitions(&memo.transitions) {
        error!("{}", e);
        return Err(e);
    }

    let mut iter = enumerate();
    let patterns: Vec<Pattern> = iter.by_ref().collect();
    debug!(statistics = ?iter.statistics(), "Search complete");

    let counts: PatternCounts = patterns.iter().collect();
    for length in MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH {
        info!("Length = {}: {} patterns", length, counts.of_length(length));
    }
    info!("Total: {} patterns", counts.total());

    if let Err(e) = check_counts(&counts) {
        error!("{}", e);
        return Err(e);
    }

    let lines_written = write_patterns(&config.path, &patterns, config.separator)?;
    info!(
        "Wrote {} patterns to {}",
        lines_written,
        config.path.display()
    );

    Ok(RunSummary {
        counts,
        path: config.path.clone(),
        lines_written,
    })
}
