//! Hierarchical containers.
//!
//! - `tree`: general trees with parent back-references
//! - `bst`: binary search trees with an injected comparator
//! - `menu`: role-filtered menus built on `Tree`

pub mod bst;
pub mod menu;
#[allow(clippy::module_inception)]
pub mod tree;

pub use bst::{BinarySearchTree, BstIter};
pub use menu::{MenuError, MenuItem, MenuTree};
pub use tree::{NodeId, Tree};
