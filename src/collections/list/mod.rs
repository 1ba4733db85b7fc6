//! Linked lists stored in a slot arena.
//!
//! - `linked_list`: singly linked, head + tail
//! - `doubly_linked_list`: `prev` back-references, closer-end lookups
//! - `circular_list`: a singly linked list read with index wraparound

pub mod circular_list;
pub mod doubly_linked_list;
pub mod linked_list;
pub(crate) mod slots;

pub use circular_list::CircularLinkedList;
pub use doubly_linked_list::{DoublyLinkedList, DoublyLinkedListIter};
pub use linked_list::{LinkedList, LinkedListIter};
