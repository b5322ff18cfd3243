// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed values that automatically record changes for backtracking.

use super::Trail;
use crate::geometry::NodeSet;

/// Values that can be stored on the trail as a raw u64.
pub trait TrailValue: Copy {
    fn to_trail(self) -> u64;
    fn from_trail(raw: u64) -> Self;
}

impl TrailValue for u8 {
    fn to_trail(self) -> u64 {
        u64::from(self)
    }

    fn from_trail(raw: u64) -> Self {
        raw as u8
    }
}

impl TrailValue for u64 {
    fn to_trail(self) -> u64 {
        self
    }

    fn from_trail(raw: u64) -> Self {
        raw
    }
}

impl TrailValue for NodeSet {
    fn to_trail(self) -> u64 {
        self.bits()
    }

    fn from_trail(raw: u64) -> Self {
        NodeSet::from_bits(raw)
    }
}

/// A value that records its old value on the trail whenever it is set.
///
/// # Example
///
/// ```
/// use lock_patterns::trail::{Trail, TrailedRegistry};
///
/// let mut trail = Trail::new();
/// let mut registry = TrailedRegistry::new();
/// let mut value = registry.register(42u64);
///
/// let checkpoint = trail.len();
/// value.set(&mut trail, 100);
/// assert_eq!(value.get(), 100);
///
/// trail.rewind_to(checkpoint, |id, old| {
///     assert_eq!(id, value.id());
///     value.restore(old);
/// });
/// assert_eq!(value.get(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Trailed<T: TrailValue> {
    value: T,
    id: usize,
}

impl<T: TrailValue> Trailed<T> {
    /// Create a new trailed value with the given ID.
    ///
    /// The caller must ensure that `id` is unique within the owning state.
    /// Use `TrailedRegistry` to hand out IDs.
    pub(crate) fn new(id: usize, initial_value: T) -> Self {
        Self {
            value: initial_value,
            id,
        }
    }

    pub fn get(&self) -> T {
        self.value
    }

    /// The trail ID of this value.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Set the value, recording the old value in the trail.
    pub fn set(&mut self, trail: &mut Trail, new_value: T) {
        trail.record_change(self.id, self.value.to_trail());
        self.value = new_value;
    }

    /// Put back a value taken from the trail.
    pub fn restore(&mut self, old_value: u64) {
        self.value = T::from_trail(old_value);
    }
}

/// Registry for managing unique IDs for Trailed values.
#[derive(Debug, Default)]
pub struct TrailedRegistry {
    next_id: usize,
}

impl TrailedRegistry {
    /// Create a new registry starting at ID 0.
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Register a new trailed value with an initial value.
    pub fn register<T: TrailValue>(&mut self, initial_value: T) -> Trailed<T> {
        let id = self.next_id;
        self.next_id += 1;
        Trailed::new(id, initial_value)
    }
}
