use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{Cost, EmptyFrontierError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<T> {
    /// Priority of the item, lower surfaces first.
    priority: Cost,
    item: T,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            // breaking ties in a deterministic way
            .then_with(|| other.item.cmp(&self.item))
    }
}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority multiset of (item, priority) pairs.
///
/// Neither items nor priorities need to be unique; the only ordering
/// guarantee is that extraction surfaces pairs in ascending priority.
/// There is no decrease-key: callers re-insert with the improved priority
/// and skip the stale entry when it eventually surfaces.
#[derive(Debug, Clone, Default)]
pub struct PriorityFrontier<T: Ord> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T: Ord> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, item: T, priority: Cost) {
        self.heap.push(Entry { priority, item });
    }

    /// Returns the minimum-priority pair without removing it.
    pub fn peek(&self) -> Result<(&T, Cost), EmptyFrontierError> {
        self.heap
            .peek()
            .map(|entry| (&entry.item, entry.priority))
            .ok_or(EmptyFrontierError)
    }

    /// Removes and returns the minimum-priority pair.
    pub fn extract_min(&mut self) -> Result<(T, Cost), EmptyFrontierError> {
        self.heap
            .pop()
            .map(|entry| (entry.item, entry.priority))
            .ok_or(EmptyFrontierError)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord + Clone> PriorityFrontier<T> {
    /// Gets a read-only cursor over the current entries in ascending priority
    /// order. The cursor snapshots the frontier: extractions and insertions
    /// performed afterwards do not affect it.
    pub fn cursor(&self) -> FrontierCursor<T> {
        FrontierCursor {
            heap: self.heap.clone(),
        }
    }
}

/// Sequential ascending-priority traversal detached from the frontier.
#[derive(Debug, Clone)]
pub struct FrontierCursor<T: Ord> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T: Ord> FrontierCursor<T> {
    /// Returns the pair the cursor is positioned on, None once exhausted.
    pub fn current(&self) -> Option<(&T, Cost)> {
        self.heap.peek().map(|entry| (&entry.item, entry.priority))
    }

    /// Steps the cursor onto the next pair in ascending priority order.
    pub fn advance(&mut self) {
        self.heap.pop();
    }
}

impl<T: Ord> Iterator for FrontierCursor<T> {
    type Item = (T, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }
}
