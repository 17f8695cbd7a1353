//! `MinQueue`: min-priority queue keyed by tentative distance.
//!
//! # Lazy decrease-key
//!
//! The queue never updates an entry in place.  When the solver finds a
//! shorter distance to a node it simply pushes a new entry; the old one
//! stays in the heap and is discarded on pop because its key exceeds the
//! node's recorded distance.  Several entries for the same payload may
//! therefore coexist.
//!
//! # Ordering
//!
//! Keys are `f64` compared with [`f64::total_cmp`].  Order among equal keys
//! is unspecified.  Both `push` and `pop_min` are O(log n).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{RoutingError, RoutingResult};

/// Heap entry ordered by *reversed* key so `BinaryHeap` (a max-heap) pops
/// the smallest key first.
struct Entry<T> {
    key: f64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key.total_cmp(&other.key) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.total_cmp(&self.key)
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority collection of `(key, payload)` pairs.
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    /// Pre-allocate for `capacity` entries (the solver uses the node count).
    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity) }
    }

    /// Insert `payload` with priority `key`.  Duplicate payloads are fine.
    pub fn push(&mut self, key: f64, payload: T) {
        self.heap.push(Entry { key, payload });
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_min(&mut self) -> RoutingResult<(f64, T)> {
        self.heap
            .pop()
            .map(|e| (e.key, e.payload))
            .ok_or(RoutingError::EmptyQueue)
    }

    /// Smallest key currently queued, or `None` if empty.
    pub fn peek_key(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.key)
    }

    /// Total number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
