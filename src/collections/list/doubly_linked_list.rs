//! `DoublyLinkedList` - a doubly linked list over a slot arena.
//!
//! Each node stores a `prev` back-reference next to its `next` link. The
//! back-reference is a plain slot index: it is used for backward traversal and
//! O(1) unlinking, never for ownership, which stays with the arena.
//!
//! Positional lookups walk from whichever end is closer to the requested
//! index, halving the average traversal cost.

use super::slots::SlotArena;
use crate::collections::ZeroCopyOps;
use crate::invariant::invariant_assert_msg;
use core::fmt;

#[derive(Debug, Clone)]
struct DoublyNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Double-ended iterator over a [`DoublyLinkedList`].
pub struct DoublyLinkedListIter<'a, T> {
    nodes: &'a SlotArena<DoublyNode<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for DoublyLinkedListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DoublyLinkedListIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for DoublyLinkedListIter<'_, T> {}

/// A doubly linked list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `append` / `prepend` | \(O(1)\) | |
/// | `remove_first` / `remove_last` | \(O(1)\) | |
/// | `get` / `insert_at` / `remove_at` | \(O(n/2)\) | Walks from the closer end |
/// | `remove` / `index_of` | \(O(n)\) | Linear scan from head |
/// | `reverse` | \(O(n)\) | Swaps links in place |
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: SlotArena<DoublyNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            nodes: SlotArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    #[inline]
    fn links(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        self.nodes
            .get(idx)
            .map_or((None, None), |n| (n.prev, n.next))
    }

    #[inline]
    fn set_prev(&mut self, idx: usize, prev: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(idx) {
            node.prev = prev;
        }
    }

    #[inline]
    fn set_next(&mut self, idx: usize, next: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(idx) {
            node.next = next;
        }
    }

    /// Slot index of the node at `index`, walking from the closer end.
    fn node_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = self.links(current?).1;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..(self.len - 1 - index) {
                current = self.links(current?).0;
            }
            current
        }
    }

    /// Adds `value` after the last element.
    pub fn append(&mut self, value: T) {
        let idx = self.nodes.alloc(DoublyNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Adds `value` before the first element.
    pub fn prepend(&mut self, value: T) {
        let idx = self.nodes.alloc(DoublyNode {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.set_prev(head, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Returns `false` when `index > len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> bool {
        if index > self.len {
            return false;
        }
        if index == 0 {
            self.prepend(value);
            return true;
        }
        if index == self.len {
            self.append(value);
            return true;
        }
        let Some(at) = self.node_at(index) else {
            return false;
        };
        let (prev, _) = self.links(at);
        let idx = self.nodes.alloc(DoublyNode {
            value,
            prev,
            next: Some(at),
        });
        if let Some(prev) = prev {
            self.set_next(prev, Some(idx));
        }
        self.set_prev(at, Some(idx));
        self.len += 1;
        true
    }

    /// Unlinks the node in slot `idx` and returns its value.
    fn unlink(&mut self, idx: usize) -> Option<T> {
        let node = self.nodes.free(idx)?;
        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes and returns the first element in O(1).
    pub fn remove_first(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    /// Removes and returns the last element in O(1).
    pub fn remove_last(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Removes and returns the element at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let idx = self.node_at(index)?;
        self.unlink(idx)
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let idx = self.node_at(index)?;
        self.nodes.get(idx).map(|n| &n.value)
    }

    /// Returns the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let idx = self.node_at(index)?;
        self.nodes.get_mut(idx).map(|n| &mut n.value)
    }

    /// Returns the first element.
    pub fn first(&self) -> Option<&T> {
        self.nodes.get(self.head?).map(|n| &n.value)
    }

    /// Returns the last element.
    pub fn last(&self) -> Option<&T> {
        self.nodes.get(self.tail?).map(|n| &n.value)
    }

    /// Returns the first element matching `predicate`.
    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|&v| predicate(v))
    }

    /// Reverses the list in place by swapping every node's links.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(idx) = current {
            let (prev, next) = self.links(idx);
            self.set_prev(idx, next);
            self.set_next(idx, prev);
            current = next;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Iterates from head to tail; `.rev()` walks the `prev` links.
    pub fn iter(&self) -> DoublyLinkedListIter<'_, T> {
        DoublyLinkedListIter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Checks that `len` matches the reachable nodes and that every `prev`
    /// link points at the node that links forward to it.
    ///
    /// Returns `true` if all invariants hold; debug builds also assert.
    pub fn validate_invariants(&self) -> bool {
        let mut count = 0usize;
        let mut expected_prev = None;
        let mut prev_ok = true;
        let mut current = self.head;
        while let Some(idx) = current {
            count += 1;
            if count > self.nodes.len() {
                break;
            }
            let (prev, next) = self.links(idx);
            prev_ok &= prev == expected_prev;
            expected_prev = Some(idx);
            current = next;
        }
        let len_ok = count == self.len && self.nodes.len() == self.len;
        let tail_ok = expected_prev == self.tail;
        invariant_assert_msg(len_ok, "len must equal the nodes reachable from head");
        invariant_assert_msg(prev_ok, "prev must point at the forward predecessor");
        invariant_assert_msg(tail_ok, "tail must be the last reachable node");
        len_ok && prev_ok && tail_ok
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut current = self.head;
        while let Some(idx) = current {
            let Some(node) = self.nodes.get(idx) else {
                break;
            };
            if &node.value == value {
                return self.unlink(idx).is_some();
            }
            current = node.next;
        }
        false
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if an equal element is in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Returns a snapshot from head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a snapshot from tail to head.
    pub fn to_vec_reversed(&self) -> Vec<T> {
        self.iter().rev().cloned().collect()
    }
}

impl<T> ZeroCopyOps<T> for DoublyLinkedList<T> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.find(f)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = DoublyLinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
