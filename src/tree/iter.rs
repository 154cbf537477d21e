//! Traversals over a [`BinarySearchTree`], yielding node ids.

use std::iter::FusedIterator;

use super::{BinarySearchTree, NodeId};

// --- In-order Iterator ---

/// Ascending-order traversal with an explicit stack of pending ancestors.
#[derive(Clone)]
pub struct InorderIter<'a, T> {
    tree: &'a BinarySearchTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> InorderIter<'a, T> {
    pub fn new(tree: &'a BinarySearchTree<T>) -> Self {
        let mut iter = InorderIter {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree[id].left;
        }
    }
}

impl<T> Iterator for InorderIter<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree[id].right);
        Some(id)
    }
}

impl<T> FusedIterator for InorderIter<'_, T> {}

// --- Ancestors Iterator ---

/// Walks parent links from a starting node up to the root.
#[derive(Clone)]
pub struct AncestorsIter<'a, T> {
    tree: &'a BinarySearchTree<T>,
    /// `None` once the root has been yielded.
    current: Option<NodeId>,
}

impl<'a, T> AncestorsIter<'a, T> {
    pub fn new(tree: &'a BinarySearchTree<T>, start: NodeId) -> Self {
        AncestorsIter {
            tree,
            current: Some(start),
        }
    }
}

impl<T> Iterator for AncestorsIter<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree[id].parent;
        Some(id)
    }
}

impl<T> FusedIterator for AncestorsIter<'_, T> {}
