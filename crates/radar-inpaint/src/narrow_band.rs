//! Narrow band - mutable min-priority queue
//!
//! The fast marching front is kept in a binary heap with lazy deletion.
//! Each key maps to the insertion sequence of its one live entry. Pushing a
//! key that is already queued records a new sequence number, which turns
//! the older heap entry into a tombstone; removal drops the mapping. A
//! popped entry is returned only if its sequence still matches the live one
//! for its key, so tombstones are discarded silently.
//!
//! Ties on priority are broken by insertion order.
//!
//! # Examples
//!
//! ```
//! use radar_inpaint::NarrowBand;
//!
//! let mut band = NarrowBand::new();
//! band.push("a", 5.0);
//! band.push("b", 3.0);
//! band.push("a", 1.0);
//! assert_eq!(band.pop(), Some(("a", 1.0)));
//! assert_eq!(band.pop(), Some(("b", 3.0)));
//! assert_eq!(band.pop(), None);
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

#[derive(Debug)]
struct Entry<K> {
    priority: f32,
    seq: u64,
    key: K,
}

impl<K> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for Entry<K> {}

impl<K> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the band pops the minimum
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue with at most one live entry per key.
#[derive(Debug)]
pub struct NarrowBand<K> {
    heap: BinaryHeap<Entry<K>>,
    live: HashMap<K, u64>,
    next_seq: u64,
    stale_skipped: usize,
}

impl<K: Hash + Eq + Clone> Default for NarrowBand<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> NarrowBand<K> {
    /// Create an empty band.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty band with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        NarrowBand {
            heap: BinaryHeap::with_capacity(capacity),
            live: HashMap::with_capacity(capacity),
            next_seq: 0,
            stale_skipped: 0,
        }
    }

    /// Insert `key` with `priority`, replacing any live entry for the key.
    ///
    /// Returns `true` if an earlier entry was superseded.
    pub fn push(&mut self, key: K, priority: f32) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;
        let replaced = self.live.insert(key.clone(), seq).is_some();
        self.heap.push(Entry { priority, seq, key });
        replaced
    }

    /// Cancel the live entry for `key`.
    ///
    /// Returns `true` if the key was queued.
    pub fn remove(&mut self, key: &K) -> bool {
        self.live.remove(key).is_some()
    }

    /// Pop the live entry with the lowest priority.
    ///
    /// Among equal priorities the earliest insertion wins.
    pub fn pop(&mut self) -> Option<(K, f32)> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.key) == Some(&entry.seq) {
                self.live.remove(&entry.key);
                return Some((entry.key, entry.priority));
            }
            self.stale_skipped += 1;
        }
        None
    }

    /// Check whether `key` has a live entry.
    pub fn contains(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Check whether no live entries remain.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of tombstones discarded by [`NarrowBand::pop`] so far.
    pub fn stale_skipped(&self) -> usize {
        self.stale_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_priority_order() {
        let mut band = NarrowBand::new();
        band.push(1usize, 2.5);
        band.push(2, 0.5);
        band.push(3, 1.5);
        assert_eq!(band.len(), 3);
        assert_eq!(band.pop(), Some((2, 0.5)));
        assert_eq!(band.pop(), Some((3, 1.5)));
        assert_eq!(band.pop(), Some((1, 2.5)));
        assert!(band.is_empty());
        assert_eq!(band.pop(), None);
    }

    #[test]
    fn test_ties_by_insertion_order() {
        let mut band = NarrowBand::new();
        for key in [7usize, 3, 9, 1] {
            band.push(key, 0.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| band.pop().map(|(k, _)| k)).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn test_repush_lowers_priority() {
        let mut band = NarrowBand::new();
        assert!(!band.push("a", 5.0));
        assert!(!band.push("b", 3.0));
        assert!(band.push("a", 1.0));
        assert_eq!(band.len(), 2);
        assert_eq!(band.pop().map(|(k, _)| k), Some("a"));
        assert_eq!(band.pop().map(|(k, _)| k), Some("b"));
        assert_eq!(band.pop(), None);
        assert_eq!(band.stale_skipped(), 1);
    }

    #[test]
    fn test_repush_raises_priority() {
        let mut band = NarrowBand::new();
        band.push("a", 1.0);
        band.push("b", 3.0);
        band.push("a", 5.0);
        assert_eq!(band.pop(), Some(("b", 3.0)));
        assert_eq!(band.pop(), Some(("a", 5.0)));
        assert_eq!(band.pop(), None);
    }

    #[test]
    fn test_repush_same_priority_moves_to_back() {
        let mut band = NarrowBand::new();
        band.push("a", 1.0);
        band.push("b", 1.0);
        band.push("a", 1.0);
        assert_eq!(band.pop(), Some(("b", 1.0)));
        assert_eq!(band.pop(), Some(("a", 1.0)));
    }

    #[test]
    fn test_removed_entry_never_returned() {
        let mut band = NarrowBand::new();
        band.push(1u32, 0.0);
        band.push(2, 1.0);
        assert!(band.remove(&1));
        assert!(!band.remove(&1));
        assert!(!band.contains(&1));
        assert_eq!(band.len(), 1);
        assert_eq!(band.pop(), Some((2, 1.0)));
        assert_eq!(band.pop(), None);
    }

    #[test]
    fn test_infinite_priority_sorts_last() {
        let mut band = NarrowBand::new();
        band.push(0u8, f32::INFINITY);
        band.push(1, 1e9);
        assert_eq!(band.pop(), Some((1, 1e9)));
        assert_eq!(band.pop(), Some((0, f32::INFINITY)));
    }

    #[test]
    fn test_key_reusable_after_pop() {
        let mut band = NarrowBand::new();
        band.push(4usize, 2.0);
        assert_eq!(band.pop(), Some((4, 2.0)));
        band.push(4, 1.0);
        assert!(band.contains(&4));
        assert_eq!(band.pop(), Some((4, 1.0)));
    }
}
