//! `SlotArena` - index-addressed node storage with an intrusive free list.
//!
//! Linked lists and trees allocate their nodes here and link them with
//! `Option<usize>` slot indices. Freed slots are threaded onto a free list and
//! reused by the next allocation, so indices stay stable for live nodes.

/// A slot in the arena.
#[derive(Debug, Clone)]
enum Slot<N> {
    Occupied(N),
    /// Next free slot index.
    Free(Option<usize>),
}

/// Node storage shared by the list and tree containers.
#[derive(Debug, Clone)]
pub(crate) struct SlotArena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<usize>,
    occupied: usize,
}

impl<N> SlotArena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Stores `node`, reusing a free slot when one exists.
    pub(crate) fn alloc(&mut self, node: N) -> usize {
        self.occupied += 1;
        if let Some(free_idx) = self.free_head {
            if let Slot::Free(next_free) = self.slots[free_idx] {
                self.free_head = next_free;
            }
            self.slots[free_idx] = Slot::Occupied(node);
            free_idx
        } else {
            self.slots.push(Slot::Occupied(node));
            self.slots.len() - 1
        }
    }

    /// Releases the slot at `idx` and returns its node.
    ///
    /// Callers unlink the node before freeing it.
    pub(crate) fn free(&mut self, idx: usize) -> Option<N> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(_)) => {}
            _ => return None,
        }
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        self.occupied -= 1;
        match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Free(_) => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&N> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut N> {
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Drops every node and forgets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}

impl<N> Default for SlotArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_reuse() {
        let mut arena = SlotArena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.free(a), Some("a"));
        assert_eq!(arena.free(a), None);
        assert_eq!(arena.get(a), None);

        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&"c"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.alloc(i)).collect();
        arena.free(ids[1]);
        arena.free(ids[3]);
        assert_eq!(arena.alloc(10), ids[3]);
        assert_eq!(arena.alloc(11), ids[1]);
        assert_eq!(arena.alloc(12), 4);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(0), None);
    }
}
