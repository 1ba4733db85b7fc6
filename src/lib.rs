//! # `furrow` - Arena-Backed Generic Containers
//!
//! A small toolkit of single-threaded, in-memory containers used by
//! marketplace-style applications: request queues, bounded undo history,
//! ordered lists, role-filtered menus and price-comparison graphs.
//!
//! ## Design
//!
//! ### Arena + Index Storage
//! - **Owned nodes**: Linked lists and trees keep their nodes in a slot arena
//!   (`Vec` of occupied/free slots). Links are `Option<usize>` slot indices.
//! - **Non-owning back-references**: `prev` and `parent` links are plain indices,
//!   used for traversal and removal only. The arena alone governs lifetimes.
//! - **Circularity as wraparound**: `CircularLinkedList` never stores a cycle;
//!   the successor of the tail is computed as the head.
//!
//! ### Sentinel Semantics
//! - Empty-container access, out-of-range indices and unknown vertices return
//!   `None`, `false` or an empty collection. No documented input panics.
//! - The single fallible constructor (`MenuTree::from_json`) returns a typed
//!   [`MenuError`].
//!
//! ### Composition over Inheritance
//! Specializations wrap a base container and add domain operations:
//!
//! | Specialization | Wraps |
//! |----------------|-------|
//! | `UndoRedoManager` | two bounded `Stack`s |
//! | `CircularLinkedList` | `LinkedList` |
//! | `MenuTree` | `Tree<MenuItem>` |
//! | `PriceComparisonGraph` | `Graph<String, f64>` |
//!
//! ## Example
//!
//! ```rust
//! use furrow::{Graph, Queue, Stack};
//!
//! let mut queue = Queue::new();
//! queue.enqueue("first");
//! queue.enqueue("second");
//! assert_eq!(queue.dequeue(), Some("first"));
//!
//! let mut stack = Stack::with_capacity(1);
//! assert!(stack.push(1));
//! assert!(!stack.push(2));
//!
//! let mut graph: Graph<&str> = Graph::undirected();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! assert_eq!(graph.find_shortest_path(&"A", &"C"), Some(vec!["A", "B", "C"]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod graph;
pub(crate) mod invariant;

pub use collections::{
    BinarySearchTree, CircularLinkedList, DoublyLinkedList, LinkedList, MenuError, MenuItem,
    MenuTree, NodeId, PriorityQueue, Queue, Stack, Tree, UndoRedoManager, ZeroCopyOps,
};
pub use graph::{Graph, GraphOptions, PriceComparisonGraph, PriceNode};

// Compile-time layout checks for the handle types.
const _: () = {
    use core::mem;

    // `NodeId` is a transparent index.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());

    // A stack is a `VecDeque` plus an optional bound.
    assert!(mem::size_of::<Stack<u64>>() <= mem::size_of::<usize>() * 6);
};
