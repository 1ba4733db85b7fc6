//! `Stack` - a LIFO stack with an optional capacity bound.
//!
//! A bounded stack rejects pushes once full: `push` reports the rejection as
//! `false` and `try_push` hands the value back. `push_evicting` instead drops
//! the bottom-most element to make room, which is what bounded histories need.
//!
//! The bound is a limit, not a reservation: storage grows on demand, so any
//! `max_size` (including `usize::MAX`) is accepted. Items live in a `VecDeque`
//! so eviction from the bottom is \(O(1)\).

use crate::collections::ZeroCopyOps;
use core::fmt;
use std::collections::VecDeque;

/// A last-in-first-out stack.
pub struct Stack<T> {
    items: VecDeque<T>,
    max_size: Option<usize>,
}

impl<T> Stack<T> {
    /// Creates an unbounded stack.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            max_size: None,
        }
    }

    /// Creates a stack that holds at most `max_size` elements.
    ///
    /// Nothing is allocated up front.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            items: VecDeque::new(),
            max_size: Some(max_size),
        }
    }

    /// Returns the configured bound, if any.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.max_size
    }

    /// Returns the number of stacked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if a bound is configured and reached.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_size.is_some_and(|max| self.items.len() >= max)
    }

    /// Pushes `value`, returning `false` (and dropping it) when the stack is full.
    #[must_use = "a bounded stack rejects pushes once full"]
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Pushes `value`, handing it back when the stack is full.
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.items.push_back(value);
        Ok(())
    }

    /// Pushes `value`, evicting and returning the bottom-most element if full.
    ///
    /// A stack bounded at zero stores nothing and returns `value` itself.
    pub fn push_evicting(&mut self, value: T) -> Option<T> {
        match self.max_size {
            Some(0) => Some(value),
            Some(max) if self.items.len() >= max => {
                let evicted = self.items.pop_front();
                self.items.push_back(value);
                evicted
            }
            _ => {
                self.items.push_back(value);
                None
            }
        }
    }

    /// Removes and returns the most recently pushed element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Returns the most recently pushed element.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter().rev()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns `true` if an equal element is on the stack.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T: Clone> Stack<T> {
    /// Returns the elements from bottom to top.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> ZeroCopyOps<T> for Stack<T> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().rev().find(|&x| f(x))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            max_size: self.max_size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("max_size", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo() {
        let mut s = Stack::new();
        assert!(s.push(1));
        assert!(s.push(2));
        assert!(s.push(3));
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
        assert!(!s.is_full());
    }

    #[test]
    fn test_stack_bounded() {
        let mut s = Stack::with_capacity(2);
        assert!(s.push('a'));
        assert!(s.push('b'));
        assert!(s.is_full());
        assert!(!s.push('c'));
        assert_eq!(s.try_push('d'), Err('d'));
        assert_eq!(s.len(), 2);
        assert!(!s.contains(&'c'));
        assert_eq!(s.pop(), Some('b'));
        assert!(!s.is_full());
    }

    #[test]
    fn test_stack_push_evicting() {
        let mut s = Stack::with_capacity(2);
        assert_eq!(s.push_evicting(1), None);
        assert_eq!(s.push_evicting(2), None);
        assert_eq!(s.push_evicting(3), Some(1));
        assert_eq!(s.to_vec(), vec![2, 3]);

        let mut zero = Stack::with_capacity(0);
        assert_eq!(zero.push_evicting(7), Some(7));
        assert!(zero.is_empty());
    }

    #[test]
    fn test_huge_bound_allocates_lazily() {
        let mut s = Stack::with_capacity(usize::MAX);
        assert_eq!(s.capacity(), Some(usize::MAX));
        assert!(s.push(1u64));
        assert_eq!(s.push_evicting(2), None);
        assert!(!s.is_full());
        assert_eq!(s.to_vec(), vec![1, 2]);

        let mut half = Stack::with_capacity(usize::MAX / 2);
        assert!(half.push(9u64));
        assert_eq!(half.peek(), Some(&9));
    }

    #[test]
    fn test_evicting_keeps_lifo_order_when_full() {
        let mut s = Stack::with_capacity(3);
        for i in 0..10 {
            s.push_evicting(i);
        }
        assert_eq!(s.to_vec(), vec![7, 8, 9]);
        assert_eq!(s.pop(), Some(9));
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![8, 7]);
    }

    #[test]
    fn test_stack_iter_top_down() {
        let mut s = Stack::new();
        for i in 0..4 {
            assert!(s.push(i));
        }
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(s.find_ref(|&x| x < 2), Some(&1));
        s.clear();
        assert!(s.is_empty());
    }
}
