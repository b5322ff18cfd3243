// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the output file.

mod common;

use common::reference_valid;
use lock_patterns::{run, OutputConfig, EXPECTED_PATTERN_COUNT};
use std::fs;

#[test]
fn test_run_writes_every_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let config = OutputConfig::new(dir.path().join("allPatterns.txt"));
    let summary = run(&config).unwrap();
    assert_eq!(summary.lines_written, EXPECTED_PATTERN_COUNT);

    let contents = fs::read_to_string(&config.path).unwrap();
    assert!(contents.ends_with('\n'));
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len() as u64, EXPECTED_PATTERN_COUNT);

    for line in &lines {
        assert!(line.chars().all(|c| ('0'..='8').contains(&c)), "bad line {:?}", line);
        let values: Vec<u8> = line.bytes().map(|b| b - b'0').collect();
        assert!(reference_valid(&values), "invalid pattern {}", line);
    }
}

#[test]
fn test_run_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = OutputConfig::new(dir.path().join("allPatterns.txt"));
    fs::write(&config.path, "not a pattern\n").unwrap();

    run(&config).unwrap();
    let contents = fs::read_to_string(&config.path).unwrap();
    assert!(!contents.contains("not a pattern"));
    assert_eq!(contents.lines().count() as u64, EXPECTED_PATTERN_COUNT);
}

#[test]
fn test_run_with_separator() {
    let dir = tempfile::tempdir().unwrap();
    let config = OutputConfig::new(dir.path().join("patterns.csv")).with_separator(',');
    run(&config).unwrap();

    let contents = fs::read_to_string(&config.path).unwrap();
    let first = contents.lines().next().unwrap();
    assert_eq!(first, "0,1,2,5");
    for line in contents.lines() {
        let parsed: lock_patterns::Pattern = line.parse().unwrap();
        assert_eq!(parsed.to_line(Some(',')), line);
    }
}

#[test]
fn test_run_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config = OutputConfig::new(dir.path().join("missing").join("allPatterns.txt"));
    let err = run(&config).unwrap_err();
    assert!(matches!(err, lock_patterns::Error::Io(_)));
}
