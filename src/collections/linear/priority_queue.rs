//! `PriorityQueue` - an insertion-sorted queue ordered by ascending priority.
//!
//! Each entry is placed before the first entry whose priority is strictly
//! greater, so entries sharing a priority leave in the order they arrived.
//! The slot is found by a front-to-back scan rather than a binary search, so
//! priorities that do not compare (a float `NaN`) never disturb the order of
//! the entries that do.

use crate::collections::ZeroCopyOps;
use core::fmt;
use std::collections::VecDeque;

/// A queued value together with its priority.
#[derive(Debug, Clone, PartialEq)]
struct PriorityEntry<T, P> {
    value: T,
    priority: P,
}

/// A queue whose `dequeue` always yields the lowest priority number first.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `enqueue` | \(O(n)\) | Linear scan for the slot, then a shift |
/// | `dequeue` | \(O(1)\) | Pops the front of a ring buffer |
/// | `peek` | \(O(1)\) | |
/// | `contains` | \(O(n)\) | Linear scan |
pub struct PriorityQueue<T, P = i64> {
    entries: VecDeque<PriorityEntry<T, P>>,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Returns the number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` ahead of every entry with a strictly greater priority.
    ///
    /// Ties land after all existing entries of equal priority. A priority
    /// that nothing is greater than (including an incomparable one) goes last.
    pub fn enqueue(&mut self, value: T, priority: P) {
        let at = self
            .entries
            .iter()
            .position(|e| e.priority > priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, PriorityEntry { value, priority });
    }

    /// Removes and returns the entry with the lowest priority number.
    pub fn dequeue(&mut self) -> Option<T> {
        self.entries.pop_front().map(|e| e.value)
    }

    /// Removes and returns the front entry along with its priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, P)> {
        self.entries.pop_front().map(|e| (e.value, e.priority))
    }

    /// Returns the value that `dequeue` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.entries.front().map(|e| &e.value)
    }

    /// Returns the priority of the front entry.
    pub fn peek_priority(&self) -> Option<&P> {
        self.entries.front().map(|e| &e.priority)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates in dequeue order, yielding `(value, priority)`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&T, &P)> + '_ {
        self.entries.iter().map(|e| (&e.value, &e.priority))
    }
}

impl<T: PartialEq, P: PartialOrd> PriorityQueue<T, P> {
    /// Returns `true` if an equal value is queued at any priority.
    pub fn contains(&self, value: &T) -> bool {
        self.entries.iter().any(|e| &e.value == value)
    }
}

impl<T: Clone, P: PartialOrd> PriorityQueue<T, P> {
    /// Returns the queued values in dequeue order.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }
}

impl<T, P: PartialOrd> ZeroCopyOps<T> for PriorityQueue<T, P> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.entries.iter().map(|e| &e.value).find(|&v| f(v))
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T, P: PartialOrd> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (&e.value, &e.priority)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_queue_order() {
        let mut pq = PriorityQueue::new();
        pq.enqueue("low", 5);
        pq.enqueue("urgent", 1);
        pq.enqueue("normal", 3);

        assert_eq!(pq.peek(), Some(&"urgent"));
        assert_eq!(pq.peek_priority(), Some(&1));
        assert_eq!(pq.dequeue(), Some("urgent"));
        assert_eq!(pq.dequeue(), Some("normal"));
        assert_eq!(pq.dequeue(), Some("low"));
        assert_eq!(pq.dequeue(), None);
    }

    #[test]
    fn test_priority_queue_ties_are_fifo() {
        let mut pq = PriorityQueue::new();
        pq.enqueue("a", 2);
        pq.enqueue("b", 1);
        pq.enqueue("c", 2);
        pq.enqueue("d", 1);
        pq.enqueue("e", 2);

        assert_eq!(pq.to_vec(), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_priority_queue_float_priorities() {
        let mut pq: PriorityQueue<&str, f64> = PriorityQueue::new();
        pq.enqueue("retry", 0.5);
        pq.enqueue("fresh", 0.25);
        assert_eq!(pq.dequeue_with_priority(), Some(("fresh", 0.25)));
        assert!(pq.contains(&"retry"));
        pq.clear();
        assert!(pq.is_empty());
    }

    #[test]
    fn test_nan_priority_does_not_reorder_numbers() {
        let mut pq: PriorityQueue<&str, f64> = PriorityQueue::new();
        pq.enqueue("a", 1.0);
        pq.enqueue("nan", f64::NAN);
        pq.enqueue("b", 0.5);
        pq.enqueue("c", 2.0);

        let order: Vec<_> = std::iter::from_fn(|| pq.dequeue()).collect();
        assert_eq!(order, vec!["b", "a", "nan", "c"]);
    }
}
