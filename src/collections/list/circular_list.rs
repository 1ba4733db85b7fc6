//! `CircularLinkedList` - a singly linked list read as a ring.
//!
//! The ring is never stored as a literal cycle. The wrapped [`LinkedList`]
//! stays acyclic and circularity is index wraparound: whenever the list is
//! non-empty, the successor of the tail is the head and the predecessor of
//! the head is the tail. This keeps construction and drop trivially safe.

use super::linked_list::{LinkedList, LinkedListIter};
use crate::collections::ZeroCopyOps;
use core::fmt;

/// A circular view over a singly linked list.
#[derive(Clone, PartialEq)]
pub struct CircularLinkedList<T> {
    list: LinkedList<T>,
}

impl<T> CircularLinkedList<T> {
    /// Creates an empty ring.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the ring is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` at the tail, just before the head in ring order.
    pub fn append(&mut self, value: T) {
        self.list.append(value);
    }

    /// Adds `value` as the new head.
    pub fn prepend(&mut self, value: T) {
        self.list.prepend(value);
    }

    /// Inserts `value` at `index` (`[0, len]`).
    pub fn insert_at(&mut self, index: usize, value: T) -> bool {
        self.list.insert_at(index, value)
    }

    /// Removes the element at `index` (`[0, len)`).
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.list.remove_at(index)
    }

    /// Removes and returns the head; the next element becomes the head.
    pub fn remove_first(&mut self) -> Option<T> {
        self.list.remove_first()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.list.get(index)
    }

    /// Returns the head.
    pub fn first(&self) -> Option<&T> {
        self.list.first()
    }

    /// Returns the tail, the element just before the head in ring order.
    pub fn last(&self) -> Option<&T> {
        self.list.last()
    }

    /// Reverses ring order; every element's successor becomes its predecessor.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Index following `index`, wrapping from the tail to the head.
    #[inline]
    pub fn successor_of(&self, index: usize) -> Option<usize> {
        let len = self.len();
        (index < len).then(|| (index + 1) % len)
    }

    /// Index preceding `index`, wrapping from the head to the tail.
    #[inline]
    pub fn predecessor_of(&self, index: usize) -> Option<usize> {
        let len = self.len();
        (index < len).then(|| (index + len - 1) % len)
    }

    /// Moves the head to the tail, advancing the ring by one step.
    pub fn rotate(&mut self) {
        if let Some(head) = self.list.remove_first() {
            self.list.append(head);
        }
    }

    /// Iterates head to tail, once.
    pub fn iter(&self) -> LinkedListIter<'_, T> {
        self.list.iter()
    }

    /// Yields every element once, starting at `index` and wrapping around.
    ///
    /// Yields nothing if `index` is out of range.
    pub fn cycle_from(&self, index: usize) -> impl Iterator<Item = &T> + '_ {
        let lap = if index < self.len() { self.len() } else { 0 };
        self.list
            .iter()
            .skip(index)
            .chain(self.list.iter().take(index))
            .take(lap)
    }

    /// Borrows the underlying acyclic list.
    pub fn as_list(&self) -> &LinkedList<T> {
        &self.list
    }

    /// Checks the wrapped list's invariants.
    pub fn validate_invariants(&self) -> bool {
        self.list.validate_invariants()
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    /// Returns the element after the first occurrence of `current`, wrapping
    /// from the tail to the head. `None` if `current` is absent.
    pub fn get_next(&self, current: &T) -> Option<&T> {
        let index = self.list.index_of(current)?;
        self.list.get(self.successor_of(index)?)
    }

    /// Returns the element before the first occurrence of `current`, wrapping
    /// from the head to the tail. `None` if `current` is absent.
    pub fn get_prev(&self, current: &T) -> Option<&T> {
        let index = self.list.index_of(current)?;
        self.list.get(self.predecessor_of(index)?)
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> bool {
        self.list.remove(value)
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.list.index_of(value)
    }

    /// Returns `true` if an equal element is in the ring.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T: Clone> CircularLinkedList<T> {
    /// Returns a snapshot from head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec()
    }
}

impl<T> ZeroCopyOps<T> for CircularLinkedList<T> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.list.find(f)
    }
}

impl<T> From<LinkedList<T>> for CircularLinkedList<T> {
    fn from(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CircularLinkedList").field(&self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_navigation() {
        let ring: CircularLinkedList<_> = vec!["a", "b", "c"].into_iter().collect();
        assert_eq!(ring.get_next(&"a"), Some(&"b"));
        assert_eq!(ring.get_next(&"c"), Some(&"a"));
        assert_eq!(ring.get_prev(&"a"), Some(&"c"));
        assert_eq!(ring.get_prev(&"b"), Some(&"a"));
        assert_eq!(ring.get_next(&"z"), None);
        assert_eq!(ring.get_prev(&"z"), None);
    }

    #[test]
    fn test_single_element_is_its_own_neighbor() {
        let mut ring = CircularLinkedList::new();
        ring.append(1);
        assert_eq!(ring.get_next(&1), Some(&1));
        assert_eq!(ring.get_prev(&1), Some(&1));
        assert_eq!(ring.successor_of(0), Some(0));
    }

    #[test]
    fn test_wrap_follows_prepend() {
        let mut ring: CircularLinkedList<_> = (2..=3).collect();
        ring.prepend(1);
        assert_eq!(ring.get_next(&3), Some(&1));
        assert_eq!(ring.get_prev(&1), Some(&3));
        assert!(ring.validate_invariants());
    }

    #[test]
    fn test_cycle_from_and_rotate() {
        let mut ring: CircularLinkedList<_> = (1..=4).collect();
        let lap: Vec<_> = ring.cycle_from(2).copied().collect();
        assert_eq!(lap, vec![3, 4, 1, 2]);
        assert_eq!(ring.cycle_from(4).count(), 0);

        ring.rotate();
        assert_eq!(ring.to_vec(), vec![2, 3, 4, 1]);
        assert_eq!(ring.get_next(&1), Some(&2));
    }

    #[test]
    fn test_base_list_operations() {
        let mut ring: CircularLinkedList<_> = (1..=4).collect();
        assert_eq!(ring.first(), Some(&1));
        assert_eq!(ring.last(), Some(&4));

        ring.reverse();
        assert_eq!(ring.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(ring.get_next(&1), Some(&4));
        assert_eq!(ring.get_prev(&4), Some(&1));

        assert_eq!(ring.remove_first(), Some(4));
        assert_eq!(ring.first(), Some(&3));
        assert_eq!(ring.get_next(&1), Some(&3));
        assert!(ring.validate_invariants());

        let mut empty: CircularLinkedList<u8> = CircularLinkedList::new();
        empty.reverse();
        assert_eq!(empty.remove_first(), None);
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_empty_ring() {
        let ring: CircularLinkedList<u8> = CircularLinkedList::new();
        assert_eq!(ring.successor_of(0), None);
        assert_eq!(ring.predecessor_of(0), None);
        assert_eq!(ring.get_next(&0), None);
    }
}
