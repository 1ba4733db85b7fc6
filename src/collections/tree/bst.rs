//! `BinarySearchTree` - an unbalanced BST ordered by an injected comparator.
//!
//! The comparator is a three-way `Fn(&T, &T) -> Ordering`; the default is the
//! element type's natural `Ord`. Insertion descends left on `Less` and right
//! otherwise, so duplicates (and values the comparator reports as equal) are
//! routed into the right subtree.
//!
//! Traversals are iterative, so degenerate (list-shaped) trees built from
//! sorted input do not grow the call stack.

use crate::collections::list::slots::SlotArena;
use core::cmp::Ordering;
use core::fmt;

#[derive(Debug, Clone)]
struct BstNode<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

/// In-order iterator over a [`BinarySearchTree`].
pub struct BstIter<'a, T> {
    nodes: &'a SlotArena<BstNode<T>>,
    stack: Vec<usize>,
}

impl<'a, T> BstIter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<usize>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.nodes.get(idx).and_then(|n| n.left);
        }
    }
}

impl<'a, T> Iterator for BstIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.nodes.get(idx)?;
        self.push_left_spine(node.right);
        Some(&node.value)
    }
}

/// A binary search tree.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` / `search` / `remove` | \(O(h)\) | `h` is the tree height, \(O(n)\) worst case |
/// | `find_min` / `find_max` | \(O(h)\) | Leftmost / rightmost walk |
/// | traversals | \(O(n)\) | Iterative with an explicit stack |
pub struct BinarySearchTree<T, C = fn(&T, &T) -> Ordering> {
    nodes: SlotArena<BstNode<T>>,
    root: Option<usize>,
    compare: C,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree ordered by `T`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty tree ordered by `compare`.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            nodes: SlotArena::new(),
            root: None,
            compare,
        }
    }

    /// Returns the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[inline]
    fn left_of(&self, idx: usize) -> Option<usize> {
        self.nodes.get(idx).and_then(|n| n.left)
    }

    #[inline]
    fn right_of(&self, idx: usize) -> Option<usize> {
        self.nodes.get(idx).and_then(|n| n.right)
    }

    /// Inserts `value`. Always succeeds; ties go to the right subtree.
    pub fn insert(&mut self, value: T) {
        let Some(mut current) = self.root else {
            let idx = self.nodes.alloc(BstNode {
                value,
                left: None,
                right: None,
            });
            self.root = Some(idx);
            return;
        };

        loop {
            let Some(node) = self.nodes.get(current) else {
                return;
            };
            let go_left = (self.compare)(&value, &node.value) == Ordering::Less;
            let next = if go_left { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => {
                    let idx = self.nodes.alloc(BstNode {
                        value,
                        left: None,
                        right: None,
                    });
                    if let Some(parent) = self.nodes.get_mut(current) {
                        if go_left {
                            parent.left = Some(idx);
                        } else {
                            parent.right = Some(idx);
                        }
                    }
                    return;
                }
            }
        }
    }

    /// Finds the slot holding a value equal to `value` and its parent slot.
    fn locate(&self, value: &T) -> Option<(usize, Option<usize>)> {
        let mut parent = None;
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.nodes.get(idx)?;
            match (self.compare)(value, &node.value) {
                Ordering::Equal => return Some((idx, parent)),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
            parent = Some(idx);
        }
        None
    }

    /// Returns `true` if a value comparing equal to `value` is stored.
    pub fn search(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// Alias for [`search`](Self::search).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Returns the smallest value (leftmost node).
    pub fn find_min(&self) -> Option<&T> {
        let mut idx = self.root?;
        while let Some(left) = self.left_of(idx) {
            idx = left;
        }
        self.nodes.get(idx).map(|n| &n.value)
    }

    /// Returns the largest value (rightmost node).
    pub fn find_max(&self) -> Option<&T> {
        let mut idx = self.root?;
        while let Some(right) = self.right_of(idx) {
            idx = right;
        }
        self.nodes.get(idx).map(|n| &n.value)
    }

    /// Points `parent`'s link to `old` (or the root) at `new`.
    fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(p) {
                    if node.left == Some(old) {
                        node.left = new;
                    } else {
                        node.right = new;
                    }
                }
            }
        }
    }

    /// Removes one value comparing equal to `value`.
    ///
    /// A node with two children takes its in-order successor's value.
    /// Returns whether a value was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some((target, parent)) = self.locate(value) else {
            return false;
        };
        let (left, right) = self
            .nodes
            .get(target)
            .map_or((None, None), |n| (n.left, n.right));

        if let (Some(_), Some(right)) = (left, right) {
            let mut successor_parent = target;
            let mut successor = right;
            while let Some(l) = self.left_of(successor) {
                successor_parent = successor;
                successor = l;
            }
            let successor_right = self.right_of(successor);
            self.replace_child(Some(successor_parent), successor, successor_right);
            if let Some(node) = self.nodes.free(successor) {
                if let Some(target_node) = self.nodes.get_mut(target) {
                    target_node.value = node.value;
                }
            }
        } else {
            self.replace_child(parent, target, left.or(right));
            self.nodes.free(target);
        }
        true
    }

    /// Visits values in ascending order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            visit(value);
        }
    }

    /// Visits each node before its left then right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let Some(node) = self.nodes.get(idx) else {
                continue;
            };
            visit(&node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// Visits each node after its left then right subtree.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        // Root-right-left order reversed is left-right-root.
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        let mut output = Vec::with_capacity(self.len());
        while let Some(idx) = stack.pop() {
            let Some(node) = self.nodes.get(idx) else {
                continue;
            };
            output.push(idx);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        for idx in output.into_iter().rev() {
            if let Some(node) = self.nodes.get(idx) {
                visit(&node.value);
            }
        }
    }

    /// Iterates values in ascending order.
    pub fn iter(&self) -> BstIter<'_, T> {
        let mut iter = BstIter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(idx) else {
                continue;
            };
            height = height.max(depth);
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }
}

impl<T: Clone, C> BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Collects the in-order traversal.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    #[test]
    fn test_traversals() {
        let bst = sample();
        let mut pre = Vec::new();
        bst.pre_order(|&v| pre.push(v));
        assert_eq!(pre, vec![50, 30, 20, 40, 70, 60, 80]);

        let mut post = Vec::new();
        bst.post_order(|&v| post.push(v));
        assert_eq!(post, vec![20, 40, 30, 60, 80, 70, 50]);

        let mut ino = Vec::new();
        bst.in_order(|&v| ino.push(v));
        assert_eq!(ino, bst.to_sorted_vec());
        assert_eq!(ino, vec![20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_search_min_max() {
        let bst = sample();
        assert!(bst.search(&60));
        assert!(!bst.search(&65));
        assert_eq!(bst.find_min(), Some(&20));
        assert_eq!(bst.find_max(), Some(&80));
        assert_eq!(bst.height(), 3);

        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.find_min(), None);
        assert_eq!(empty.find_max(), None);
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn test_duplicates_go_right() {
        let mut bst = BinarySearchTree::new();
        bst.insert(5);
        bst.insert(5);
        bst.insert(5);
        assert_eq!(bst.len(), 3);
        assert_eq!(bst.height(), 3);
        assert_eq!(bst.to_sorted_vec(), vec![5, 5, 5]);
    }

    #[test]
    fn test_custom_comparator() {
        let mut bst = BinarySearchTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        for word in ["pear", "fig", "banana", "kiwi"] {
            bst.insert(word);
        }
        // "kiwi" ties with "pear" and lands to its right.
        assert_eq!(bst.to_sorted_vec(), vec!["fig", "pear", "kiwi", "banana"]);
        assert!(bst.search(&"plum"));
        assert_eq!(bst.find_max(), Some(&"banana"));
    }

    #[test]
    fn test_remove_cases() {
        let mut bst = sample();
        // Leaf.
        assert!(bst.remove(&20));
        // One child.
        bst.insert(65);
        assert!(bst.remove(&60));
        // Two children.
        assert!(bst.remove(&50));
        assert!(!bst.remove(&50));
        assert_eq!(bst.to_sorted_vec(), vec![30, 40, 65, 70, 80]);
        assert_eq!(bst.len(), 5);

        // Root with two children whose successor is its direct right child.
        let mut small: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
        assert!(small.remove(&2));
        assert_eq!(small.to_sorted_vec(), vec![1, 3]);
        let mut pre = Vec::new();
        small.pre_order(|&v| pre.push(v));
        assert_eq!(pre, vec![3, 1]);
    }
}
