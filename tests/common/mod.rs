// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The reference rule here works from grid coordinates directly, without
//! the crate's transition tables, so the two can be checked against each
//! other.

#![allow(dead_code)]

use lock_patterns::Pattern;
use std::collections::HashSet;

/// The node strictly between `from` and `to`, if the segment passes through one.
pub fn reference_middle(from: u8, to: u8) -> Option<u8> {
    let (r1, c1) = (i32::from(from / 3), i32::from(from % 3));
    let (r2, c2) = (i32::from(to / 3), i32::from(to % 3));
    let (dr, dc) = (r2 - r1, c2 - c1);
    if dr % 2 == 0 && dc % 2 == 0 && (dr, dc) != (0, 0) {
        let (mr, mc) = (r1 + dr / 2, c1 + dc / 2);
        Some((mr * 3 + mc) as u8)
    } else {
        None
    }
}

/// Reference transition rule: fresh target, and any middle already visited.
pub fn reference_legal(path: &[u8], to: u8) -> bool {
    if to > 8 || path.contains(&to) {
        return false;
    }
    match (path.last(), path.last().and_then(|&from| reference_middle(from, to))) {
        (None, _) => true,
        (Some(_), None) => true,
        (Some(_), Some(middle)) => path.contains(&middle),
    }
}

/// Check a whole node sequence against the reference rule and length bounds.
pub fn reference_valid(nodes: &[u8]) -> bool {
    if !(4..=9).contains(&nodes.len()) {
        return false;
    }
    (0..nodes.len()).all(|i| reference_legal(&nodes[..i], nodes[i]))
}

/// Number of reference-legal paths of each length 0..=9, counted by brute force.
pub fn reference_path_counts() -> [u64; 10] {
    fn walk(path: &mut Vec<u8>, counts: &mut [u64; 10]) {
        counts[path.len()] += 1;
        for to in 0..9 {
            if reference_legal(path, to) {
                path.push(to);
                walk(path, counts);
                path.pop();
            }
        }
    }
    let mut counts = [0; 10];
    walk(&mut Vec::new(), &mut counts);
    counts
}

/// Every pattern as its node values.
pub fn pattern_values(pattern: &Pattern) -> Vec<u8> {
    pattern.nodes().iter().map(|n| n.value()).collect()
}

/// Every reference-valid pattern, as node values.
pub fn reference_patterns() -> HashSet<Vec<u8>> {
    fn walk(path: &mut Vec<u8>, out: &mut HashSet<Vec<u8>>) {
        if path.len() >= 4 {
            out.insert(path.clone());
        }
        for to in 0..9 {
            if reference_legal(path, to) {
                path.push(to);
                walk(path, out);
                path.pop();
            }
        }
    }
    let mut out = HashSet::new();
    walk(&mut Vec::new(), &mut out);
    out
}
