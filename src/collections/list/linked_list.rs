//! `LinkedList` - a singly linked list over a slot arena.
//!
//! Nodes live in a [`SlotArena`] and point at their successor by slot index.
//! The list keeps both `head` and `tail`, so appends and prepends are O(1);
//! positional operations walk from the head to the predecessor node.
//!
//! Index ranges:
//! - `insert_at`: `[0, len]`
//! - `remove_at` / `get`: `[0, len)`
//!
//! Out-of-range indices return `false` / `None`; nothing here panics.

use super::slots::SlotArena;
use crate::collections::ZeroCopyOps;
use crate::invariant::invariant_assert_msg;
use core::fmt;

#[derive(Debug, Clone)]
pub(crate) struct ListNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
}

/// Iterator over a [`LinkedList`] from head to tail.
pub struct LinkedListIter<'a, T> {
    nodes: &'a SlotArena<ListNode<T>>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIter<'_, T> {}

/// A singly linked list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `append` / `prepend` | \(O(1)\) | Tail pointer is maintained |
/// | `remove_first` | \(O(1)\) | |
/// | `insert_at` / `remove_at` / `get` | \(O(n)\) | Walks to the predecessor |
/// | `remove` / `index_of` / `contains` | \(O(n)\) | Linear scan |
/// | `reverse` | \(O(n)\) | In place, tail rebuilt |
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SlotArena<ListNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
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
    fn next_of(&self, idx: usize) -> Option<usize> {
        self.nodes.get(idx).and_then(|n| n.next)
    }

    #[inline]
    fn set_next(&mut self, idx: usize, next: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(idx) {
            node.next = next;
        }
    }

    /// Slot index of the node at position `index`.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = self.next_of(current?);
        }
        current
    }

    /// Adds `value` after the last element.
    pub fn append(&mut self, value: T) {
        let idx = self.nodes.alloc(ListNode { value, next: None });
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Adds `value` before the first element.
    pub fn prepend(&mut self, value: T) {
        let idx = self.nodes.alloc(ListNode {
            value,
            next: self.head,
        });
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Returns `false` (leaving the list untouched) when `index > len`.
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
        let Some(prev) = self.slot_at(index - 1) else {
            return false;
        };
        let next = self.next_of(prev);
        let idx = self.nodes.alloc(ListNode { value, next });
        self.set_next(prev, Some(idx));
        self.len += 1;
        true
    }

    /// Removes and returns the first element.
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.free(head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes and returns the element at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }
        let prev = self.slot_at(index - 1)?;
        let target = self.next_of(prev)?;
        Some(self.unlink_after(prev, target))
    }

    /// Unlinks `target`, whose predecessor is `prev`, and frees it.
    fn unlink_after(&mut self, prev: usize, target: usize) -> T {
        let next = self.next_of(target);
        self.set_next(prev, next);
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.len -= 1;
        match self.nodes.free(target) {
            Some(node) => node.value,
            None => unreachable!("linked node {target} missing from arena"),
        }
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let idx = self.slot_at(index)?;
        self.nodes.get(idx).map(|n| &n.value)
    }

    /// Returns the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let idx = self.slot_at(index)?;
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

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let next = self.next_of(idx);
            self.set_next(idx, prev);
            prev = Some(idx);
            current = next;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Checks that `len` matches the reachable nodes and `tail` ends the chain.
    ///
    /// Returns `true` if all invariants hold; debug builds also assert.
    pub fn validate_invariants(&self) -> bool {
        let mut count = 0usize;
        let mut last = None;
        let mut current = self.head;
        while let Some(idx) = current {
            count += 1;
            if count > self.nodes.len() {
                break;
            }
            last = Some(idx);
            current = self.next_of(idx);
        }
        let len_ok = count == self.len && self.nodes.len() == self.len;
        let tail_ok = last == self.tail;
        invariant_assert_msg(len_ok, "len must equal the nodes reachable from head");
        invariant_assert_msg(tail_ok, "tail must be the last reachable node");
        len_ok && tail_ok
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first element equal to `value`.
    ///
    /// Returns whether an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(head) = self.head else {
            return false;
        };
        if self.nodes.get(head).is_some_and(|n| &n.value == value) {
            return self.remove_first().is_some();
        }
        let mut prev = head;
        while let Some(idx) = self.next_of(prev) {
            if self.nodes.get(idx).is_some_and(|n| &n.value == value) {
                self.unlink_after(prev, idx);
                return true;
            }
            prev = idx;
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

impl<T: Clone> LinkedList<T> {
    /// Returns a snapshot of the list in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> ZeroCopyOps<T> for LinkedList<T> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.find(f)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
