//! Min-priority frontier for best-first search.
//!
//! Entries are stored in a min-heap keyed by `(priority, cost, seq)`.
//! Lower priorities are popped first; ties fall back to the lower
//! accumulated cost and then to insertion order (FIFO), so the order never
//! depends on comparing states.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use trek_core::Cost;

/// An entry in the frontier.
#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: Cost,
    cost: Cost,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.key().cmp(&other.key())
    }
}

impl<T> Entry<T> {
    #[inline]
    fn key(&self) -> (Cost, Cost, u64) {
        (self.priority, self.cost, self.seq)
    }
}

/// A priority frontier of discovered-but-unexpanded items.
///
/// The same state may be pushed several times; callers discard stale
/// entries on pop (lazy deletion).
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an item with its priority and accumulated cost.
    pub fn push(&mut self, item: T, priority: Cost, cost: Cost) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            cost,
            seq,
        }));
    }

    /// Pop the entry with the lowest `(priority, cost, seq)`, returning the
    /// item and its accumulated cost.
    pub fn pop(&mut self) -> Option<(T, Cost)> {
        self.heap.pop().map(|Reverse(entry)| (entry.item, entry.cost))
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_priority_first() {
        let mut f = Frontier::new();
        f.push("a", 3, 0);
        f.push("b", 1, 0);
        f.push("c", 2, 0);

        assert_eq!(f.pop(), Some(("b", 0)));
        assert_eq!(f.pop(), Some(("c", 0)));
        assert_eq!(f.pop(), Some(("a", 0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn cost_breaks_priority_ties() {
        let mut f = Frontier::new();
        f.push("deep", 4, 3);
        f.push("shallow", 4, 1);

        assert_eq!(f.pop(), Some(("shallow", 1)));
        assert_eq!(f.pop(), Some(("deep", 3)));
    }

    #[test]
    fn fifo_on_full_ties() {
        let mut f = Frontier::new();
        f.push("first", 2, 2);
        f.push("second", 2, 2);
        f.push("third", 2, 2);

        assert_eq!(f.pop().map(|(i, _)| i), Some("first"));
        assert_eq!(f.pop().map(|(i, _)| i), Some("second"));
        assert_eq!(f.pop().map(|(i, _)| i), Some("third"));
    }

    #[test]
    fn items_need_no_ordering() {
        struct Opaque(#[allow(dead_code)] f32);

        let mut f = Frontier::new();
        f.push(Opaque(f32::NAN), 1, 0);
        f.push(Opaque(0.0), 1, 0);
        assert_eq!(f.len(), 2);
        assert!(f.pop().is_some());
        assert!(f.pop().is_some());
        assert!(f.is_empty());
    }
}
