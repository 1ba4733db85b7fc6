//! `Tree` - a general tree with unbounded fan-out over a slot arena.
//!
//! Every node owns an ordered list of child slot indices and keeps a `parent`
//! back-reference. The parent link is used for upward walks (`depth`,
//! `path_to_root`) and detaching subtrees; the arena owns every value.
//!
//! Traversal order:
//! - DFS is pre-order: a node before its children, children left-to-right.
//! - BFS is level order.
//! - `find`, `find_by` and `leaves` follow DFS pre-order.

use crate::collections::linear::Queue;
use crate::collections::list::slots::SlotArena;
use crate::collections::ZeroCopyOps;
use crate::invariant::invariant_assert_msg;
use core::fmt;

/// Handle to a node in a [`Tree`].
///
/// A handle stays valid until its node is removed. Slots are reused after
/// removal, so a stale handle may later resolve to a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the underlying slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// A rooted tree with any number of children per node.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: SlotArena<TreeNode<T>>,
    root: Option<usize>,
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: SlotArena::new(),
            root: None,
        }
    }

    /// Creates a tree holding a single root node.
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.set_root(value);
        tree
    }

    /// Replaces the whole tree with a single root node.
    pub fn set_root(&mut self, value: T) -> NodeId {
        self.nodes.clear();
        let idx = self.nodes.alloc(TreeNode {
            value,
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(idx);
        NodeId(idx)
    }

    /// Returns the root handle.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(NodeId)
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns `true` if `id` refers to a live node.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some()
    }

    /// Appends a child holding `value` under `parent`.
    ///
    /// Returns `None` if `parent` is not a live node.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> Option<NodeId> {
        self.nodes.get(parent.0)?;
        let idx = self.nodes.alloc(TreeNode {
            value,
            parent: Some(parent.0),
            children: Vec::new(),
        });
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(idx);
        }
        Some(NodeId(idx))
    }

    /// Detaches and drops the subtree rooted at `id`, returning its root value.
    pub fn remove_subtree(&mut self, id: NodeId) -> Option<T> {
        let parent = self.nodes.get(id.0)?.parent;
        match parent {
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(p) {
                    node.children.retain(|&c| c != id.0);
                }
            }
            None => self.root = None,
        }

        let mut pending = vec![id.0];
        let mut removed_root = None;
        while let Some(idx) = pending.pop() {
            if let Some(node) = self.nodes.free(idx) {
                pending.extend(node.children);
                if idx == id.0 {
                    removed_root = Some(node.value);
                }
            }
        }
        removed_root
    }

    /// Returns the value stored at `id`.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|n| &n.value)
    }

    /// Returns the value stored at `id` mutably.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|n| &mut n.value)
    }

    /// Returns the parent of `id`, or `None` for the root and unknown nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent.map(NodeId)
    }

    /// Returns the children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&c| NodeId(c))
    }

    /// Returns the number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut node = self.nodes.get(id.0)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Returns the handles from `id` up to the root, both inclusive.
    ///
    /// Empty if `id` is unknown.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.nodes.get(id.0).map(|_| id.0);
        while let Some(idx) = current {
            path.push(NodeId(idx));
            current = self.nodes.get(idx).and_then(|n| n.parent);
        }
        path
    }

    /// Slot indices with their depth in DFS pre-order.
    fn pre_order(&self) -> Vec<(usize, usize)> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(idx) else {
                continue;
            };
            order.push((idx, depth));
            stack.extend(node.children.iter().rev().map(|&c| (c, depth + 1)));
        }
        order
    }

    /// Visits every node in pre-order with its depth (root is 0).
    pub fn traverse_dfs<F>(&self, mut visit: F)
    where
        F: FnMut(&T, usize),
    {
        for (idx, depth) in self.pre_order() {
            if let Some(node) = self.nodes.get(idx) {
                visit(&node.value, depth);
            }
        }
    }

    /// Visits every node level by level with its depth (root is 0).
    pub fn traverse_bfs<F>(&self, mut visit: F)
    where
        F: FnMut(&T, usize),
    {
        let mut queue = Queue::new();
        if let Some(root) = self.root {
            queue.enqueue((root, 0));
        }
        while let Some((idx, depth)) = queue.dequeue() {
            let Some(node) = self.nodes.get(idx) else {
                continue;
            };
            visit(&node.value, depth);
            queue.extend(node.children.iter().map(|&c| (c, depth + 1)));
        }
    }

    /// Returns the first node in pre-order whose value satisfies `predicate`.
    pub fn find_by<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&T) -> bool,
    {
        self.pre_order()
            .into_iter()
            .map(|(idx, _)| idx)
            .find(|&idx| self.nodes.get(idx).is_some_and(|n| predicate(&n.value)))
            .map(NodeId)
    }

    /// Returns every childless node in pre-order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.pre_order()
            .into_iter()
            .filter(|&(idx, _)| self.nodes.get(idx).is_some_and(|n| n.children.is_empty()))
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }

    /// Returns the values of every childless node in pre-order.
    pub fn leaf_values(&self) -> Vec<&T> {
        self.leaves().into_iter().filter_map(|id| self.get(id)).collect()
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        self.pre_order()
            .into_iter()
            .map(|(_, depth)| depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterates `(handle, value)` pairs in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.pre_order()
            .into_iter()
            .filter_map(move |(idx, _)| self.nodes.get(idx).map(|n| (NodeId(idx), &n.value)))
    }

    /// Checks that every reachable node's parent link matches the node that
    /// lists it as a child and that `len` equals the reachable node count.
    ///
    /// Returns `true` if all invariants hold; debug builds also assert.
    pub fn validate_invariants(&self) -> bool {
        let order = self.pre_order();
        let len_ok = order.len() == self.nodes.len();
        let mut parent_ok = self
            .root
            .and_then(|r| self.nodes.get(r))
            .map_or(true, |n| n.parent.is_none());
        for &(idx, _) in &order {
            if let Some(node) = self.nodes.get(idx) {
                for &child in &node.children {
                    parent_ok &= self.nodes.get(child).is_some_and(|c| c.parent == Some(idx));
                }
            }
        }
        invariant_assert_msg(len_ok, "len must equal the nodes reachable from root");
        invariant_assert_msg(parent_ok, "parent must point at the node listing the child");
        len_ok && parent_ok
    }
}

impl<T: PartialEq> Tree<T> {
    /// Returns the first node in pre-order holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.find_by(|v| v == value)
    }
}

impl<T> ZeroCopyOps<T> for Tree<T> {
    fn find_ref<F>(&self, f: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.find_by(f).and_then(|id| self.get(id))
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///        a
    ///      / | \
    ///     b  c  d
    ///    / \     \
    ///   e   f     g
    /// ```
    fn sample() -> (Tree<char>, Vec<NodeId>) {
        let mut tree = Tree::with_root('a');
        let a = tree.root().unwrap();
        let b = tree.add_child(a, 'b').unwrap();
        let c = tree.add_child(a, 'c').unwrap();
        let d = tree.add_child(a, 'd').unwrap();
        let e = tree.add_child(b, 'e').unwrap();
        let f = tree.add_child(b, 'f').unwrap();
        let g = tree.add_child(d, 'g').unwrap();
        (tree, vec![a, b, c, d, e, f, g])
    }

    #[test]
    fn test_dfs_pre_order() {
        let (tree, _) = sample();
        let mut seen = Vec::new();
        tree.traverse_dfs(|&v, depth| seen.push((v, depth)));
        assert_eq!(
            seen,
            vec![('a', 0), ('b', 1), ('e', 2), ('f', 2), ('c', 1), ('d', 1), ('g', 2)]
        );
    }

    #[test]
    fn test_bfs_level_order() {
        let (tree, _) = sample();
        let mut seen = Vec::new();
        tree.traverse_bfs(|&v, _| seen.push(v));
        assert_eq!(seen, vec!['a', 'b', 'c', 'd', 'e', 'f', 'g']);
    }

    #[test]
    fn test_find_leaves_height() {
        let (tree, ids) = sample();
        assert_eq!(tree.find(&'f'), Some(ids[5]));
        assert_eq!(tree.find(&'z'), None);
        assert_eq!(tree.find_by(|v| *v > 'c'), Some(ids[4]));
        assert_eq!(tree.leaf_values(), vec![&'e', &'f', &'c', &'g']);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_height_edge_cases() {
        let empty: Tree<u8> = Tree::new();
        assert_eq!(empty.height(), 0);
        assert_eq!(empty.len(), 0);
        assert!(empty.leaves().is_empty());

        let single = Tree::with_root(1);
        assert_eq!(single.height(), 1);
        assert_eq!(single.leaf_values(), vec![&1]);
    }

    #[test]
    fn test_parent_links_and_paths() {
        let (tree, ids) = sample();
        assert_eq!(tree.parent(ids[6]), Some(ids[3]));
        assert_eq!(tree.parent(ids[0]), None);
        assert_eq!(tree.depth(ids[4]), Some(2));
        assert_eq!(tree.path_to_root(ids[5]), vec![ids[5], ids[1], ids[0]]);
        assert_eq!(tree.children(ids[1]).collect::<Vec<_>>(), vec![ids[4], ids[5]]);
        assert!(tree.validate_invariants());
    }

    #[test]
    fn test_remove_subtree() {
        let (mut tree, ids) = sample();
        assert_eq!(tree.remove_subtree(ids[1]), Some('b'));
        assert_eq!(tree.len(), 4);
        assert!(!tree.contains_node(ids[4]));
        assert_eq!(tree.find(&'e'), None);
        assert!(tree.validate_invariants());

        let h = tree.add_child(ids[2], 'h').unwrap();
        assert_eq!(tree.path_to_root(h), vec![h, ids[2], ids[0]]);
        assert!(tree.validate_invariants());

        assert_eq!(tree.remove_subtree(ids[0]), Some('a'));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_unknown_parent() {
        let (mut tree, ids) = sample();
        tree.remove_subtree(ids[6]);
        assert_eq!(tree.add_child(ids[6], 'x'), None);
    }
}
