//! Linear containers: FIFO queues, priority queues and LIFO stacks.
//!
//! `UndoRedoManager` composes two bounded stacks.

pub mod priority_queue;
pub mod queue;
pub mod stack;
pub mod undo_redo;

pub use priority_queue::PriorityQueue;
pub use queue::{Queue, QueueIter};
pub use stack::Stack;
pub use undo_redo::UndoRedoManager;
