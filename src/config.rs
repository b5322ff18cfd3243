// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output configuration.

use std::path::PathBuf;

/// File written by the binary, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "allPatterns.txt";

/// Where and how patterns are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output file, overwritten on every run
    pub path: PathBuf,

    /// Character placed between nodes, if any
    pub separator: Option<char>,
}

impl OutputConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: None,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}
