// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern type: an ordered sequence of distinct nodes.
//!
//! Patterns are small fixed-size values so that the enumerator can hand them
//! out by copy without allocating.
//!
//! # Examples
//!
//! ```
//! use lock_patterns::geometry::Pattern;
//!
//! let pattern: Pattern = "1025".parse().unwrap();
//! assert_eq!(pattern.len(), 4);
//! assert_eq!(pattern.to_string(), "1025");
//! assert_eq!(pattern.to_line(Some('-')), "1-0-2-5");
//!
//! // 0 -> 2 jumps over 1, which has not been visited yet.
//! assert!("0215".parse::<Pattern>().is_err());
//! ```

use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, NNODES};
use crate::geometry::Node;
use crate::memo::MemoizedData;
use std::fmt;
use std::str::FromStr;
use strum_macros::EnumCount as EnumCountMacro;

/// Reasons a node sequence is not a valid unlock pattern.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum PatternViolation {
    /// Fewer than MIN_PATTERN_LENGTH nodes.
    TooShort { length: usize },

    /// More nodes than the grid holds.
    TooLong { length: usize },

    /// A digit that does not name a grid node.
    NodeOutOfRange { value: u32, position: usize },

    /// A node that already appears earlier in the sequence.
    RepeatedNode { node: Node, position: usize },

    /// A straight jump over a node that has not been visited yet.
    SkippedNode {
        from: Node,
        to: Node,
        middle: Node,
        position: usize,
    },
}

impl fmt::Display for PatternViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternViolation::TooShort { length } => {
                write!(
                    f,
                    "Pattern has {} nodes (min {})",
                    length, MIN_PATTERN_LENGTH
                )
            }
            PatternViolation::TooLong { length } => {
                write!(
                    f,
                    "Pattern has {} nodes (max {})",
                    length, MAX_PATTERN_LENGTH
                )
            }
            PatternViolation::NodeOutOfRange { value, position } => {
                write!(
                    f,
                    "Node {} at position {} is not on the grid",
                    value, position
                )
            }
            PatternViolation::RepeatedNode { node, position } => {
                write!(f, "Node {} repeated at position {}", node, position)
            }
            PatternViolation::SkippedNode {
                from,
                to,
                middle,
                position,
            } => {
                write!(
                    f,
                    "Move {} -> {} at position {} skips unvisited node {}",
                    from, to, position, middle
                )
            }
        }
    }
}

impl std::error::Error for PatternViolation {}

/// A complete unlock pattern of MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    nodes: [Node; NNODES],
    len: u8,
}

impl Pattern {
    /// Build a pattern from a path the caller has already checked.
    ///
    /// Used by the enumerator, whose predicates only ever extend legal paths.
    pub(crate) fn from_legal_path(path: &[Node]) -> Self {
        debug_assert!((MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&path.len()));
        let mut nodes = [Node::default(); NNODES];
        nodes[..path.len()].copy_from_slice(path);
        Self {
            nodes,
            len: path.len() as u8,
        }
    }

    /// Build a pattern from arbitrary nodes, checking every rule.
    pub fn try_from_nodes(path: &[Node]) -> Result<Self, PatternViolation> {
        validate_nodes(path)?;
        Ok(Self::from_legal_path(path))
    }

    /// The nodes of the pattern in drawing order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: patterns have at least MIN_PATTERN_LENGTH nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Node {
        self.nodes[0]
    }

    pub fn last(&self) -> Node {
        self.nodes[self.len() - 1]
    }

    /// Re-check this pattern against the length and transition rules.
    pub fn validate(&self) -> Result<(), PatternViolation> {
        validate_nodes(self.nodes())
    }

    /// Render as digits, optionally joined by a single separator.
    pub fn to_line(&self, separator: Option<char>) -> String {
        let mut line = String::with_capacity(2 * self.len());
        for (i, node) in self.nodes().iter().enumerate() {
            if i > 0 {
                if let Some(sep) = separator {
                    line.push(sep);
                }
            }
            line.push(node.to_char());
        }
        line
    }
}

/// Check length bounds, then the transition rule at every step.
fn validate_nodes(path: &[Node]) -> Result<(), PatternViolation> {
    if path.len() < MIN_PATTERN_LENGTH {
        return Err(PatternViolation::TooShort { length: path.len() });
    }
    if path.len() > MAX_PATTERN_LENGTH {
        return Err(PatternViolation::TooLong { length: path.len() });
    }
    MemoizedData::shared().transitions.check_path(path)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

impl FromStr for Pattern {
    type Err = PatternViolation;

    /// Parse a digit string. Non-digit characters are treated as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = Vec::with_capacity(NNODES);
        for c in s.chars() {
            let Some(digit) = c.to_digit(10) else {
                continue;
            };
            match Node::try_new(digit as u8) {
                Some(node) => path.push(node),
                None => {
                    return Err(PatternViolation::NodeOutOfRange {
                        value: digit,
                        position: path.len(),
                    })
                }
            }
        }
        Self::try_from_nodes(&path)
    }
}

impl TryFrom<&[u8]> for Pattern {
    type Error = PatternViolation;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let mut path = Vec::with_capacity(values.len());
        for (position, &value) in values.iter().enumerate() {
            let node = Node::try_new(value).ok_or(PatternViolation::NodeOutOfRange {
                value: u32::from(value),
                position,
            })?;
            path.push(node);
        }
        Self::try_from_nodes(&path)
    }
}
