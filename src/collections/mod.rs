//! Generic containers.
//!
//! Containers are organized by shape:
//! - `linear`: queues, stacks and the undo/redo manager built on stacks
//! - `list`: singly, doubly and circular linked lists over a slot arena
//! - `tree`: general trees, binary search trees and role-filtered menus

pub mod linear;
pub mod list;
pub mod tree;

pub use linear::{PriorityQueue, Queue, Stack, UndoRedoManager};
pub use list::{CircularLinkedList, DoublyLinkedList, LinkedList};
pub use tree::{BinarySearchTree, MenuError, MenuItem, MenuTree, NodeId, Tree};

/// Borrowing search helpers shared by every sequence-like container.
///
/// Implementations visit elements in the container's natural order
/// (FIFO for queues, top-to-bottom for stacks, head-to-tail for lists,
/// pre-order for trees) and never clone or move elements.
pub trait ZeroCopyOps<T> {
    /// Returns the first element matching `f`.
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool;

    /// Returns `true` if any element matches `f`.
    fn any_ref<F>(&self, f: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.find_ref(f).is_some()
    }

    /// Returns `true` if every element matches `f`.
    fn all_ref<F>(&self, f: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.find_ref(|x| !f(x)).is_none()
    }
}
