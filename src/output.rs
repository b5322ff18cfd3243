// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flat text output: one pattern per line.

use crate::error::Result;
use crate::geometry::Pattern;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write each pattern on its own `\n`-terminated line.
///
/// Returns the number of lines written. The writer is flushed before
/// returning.
pub fn write_lines<'a, W, I>(writer: &mut W, patterns: I, separator: Option<char>) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = &'a Pattern>,
{
    let mut lines = 0;
    for pattern in patterns {
        match separator {
            None => writeln!(writer, "{}", pattern)?,
            Some(_) => writeln!(writer, "{}", pattern.to_line(separator))?,
        }
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

/// Create (or truncate) `path` and write every pattern to it.
pub fn write_patterns<'a, I>(path: &Path, patterns: I, separator: Option<char>) -> Result<u64>
where
    I: IntoIterator<Item = &'a Pattern>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let lines = write_lines(&mut writer, patterns, separator)?;
    debug!(path = %path.display(), lines, "Patterns written");
    Ok(lines)
}
