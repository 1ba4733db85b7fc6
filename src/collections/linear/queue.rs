//! `Queue` - a growable FIFO ring buffer.
//!
//! Elements live in a contiguous `Vec<Option<T>>` addressed with ring-buffer
//! arithmetic, so `enqueue` and `dequeue` never shift elements.
//!
//! Performance Characteristics:
//! - Enqueue: O(1) amortized (the buffer doubles when full)
//! - Dequeue/Peek: O(1)
//! - `contains`: O(n) scan in FIFO order

use crate::collections::ZeroCopyOps;
use core::fmt;

const MIN_CAPACITY: usize = 4;

/// A first-in-first-out queue.
pub struct Queue<T> {
    buffer: Vec<Option<T>>,
    /// Index of the front element.
    head: usize,
    len: usize,
}

/// Iterator over a [`Queue`] in FIFO order.
pub struct QueueIter<'a, T> {
    queue: &'a Queue<T>,
    range: core::ops::Range<usize>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.range.next()?;
        self.queue.get(i)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for QueueIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.range.next_back()?;
        self.queue.get(i)
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Self {
            buffer,
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Physical slot of the logical position `i`.
    #[inline]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.buffer.len()
    }

    /// Appends `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.buffer.len() {
            self.grow();
        }
        let tail = self.slot(self.len);
        self.buffer[tail] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        value
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the element at logical position `index` (0 is the front).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.slot(index)].as_ref()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            queue: self,
            range: 0..self.len,
        }
    }

    /// Dequeues every element in FIFO order.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        core::iter::from_fn(move || self.dequeue())
    }

    /// Re-lays the ring into a buffer twice as large, front element at slot 0.
    fn grow(&mut self) {
        let new_cap = (self.buffer.len() * 2).max(MIN_CAPACITY);
        let mut buffer: Vec<Option<T>> = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            let slot = self.slot(i);
            buffer.push(self.buffer[slot].take());
        }
        buffer.resize_with(new_cap, || None);
        self.buffer = buffer;
        self.head = 0;
    }
}

impl<T: Clone> Queue<T> {
    /// Returns a snapshot of the queue in FIFO order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns `true` if an equal element is queued.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|x| x == value)
    }
}

impl<T> ZeroCopyOps<T> for Queue<T> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|&x| f(x))
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
