//! An arena-backed binary search tree.
//!
//! Nodes live in a single `Vec` and refer to each other through [`NodeId`]
//! indices instead of owning pointers, so a node can know both its parent and
//! its children without any reference cycles:
//!
//! *   [`BstNode<T>`]: the stored value plus `parent`, `left` and `right` links.
//! *   [`BinarySearchTree<T>`]: the arena and its root. Insertion and search walk
//!     down iteratively; nothing is recursive.
//! *   [`InorderIter`] and [`AncestorsIter`]: explicit-stack traversals over node ids.
//!
//! Nodes are never removed, so a `NodeId` stays valid for the lifetime of the tree.

use std::{cmp::Ordering, ops::Index};

use derive_more::{From, Into};
use thiserror::Error;

pub mod iter;

pub use iter::{AncestorsIter, InorderIter};

/// A type-safe identifier for a node within a [`BinarySearchTree`].
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct BstNode<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> BstNode<T> {
    fn leaf(value: T, parent: Option<NodeId>) -> Self {
        BstNode {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("the tree has no root")]
    Empty,
}

/// Outcome of [`BinarySearchTree::insert`].
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted(NodeId),
    /// An equal value was already stored; the tree is unchanged.
    AlreadyPresent(NodeId),
}

impl Insertion {
    pub fn node(self) -> NodeId {
        match self {
            Insertion::Inserted(id) | Insertion::AlreadyPresent(id) => id,
        }
    }

    pub fn is_inserted(self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// A binary search tree of distinct values.
///
/// # Examples
///
/// ```
/// use puzzlekit::tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<i32> = [5, 6, 8, 700, 2, -22].into_iter().collect();
/// assert_eq!(tree.values().copied().collect::<Vec<_>>(), vec![-22, 2, 5, 6, 8, 700]);
/// assert!(tree.contains(&700));
/// assert_eq!(tree.height(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct BinarySearchTree<T> {
    pub(crate) nodes: Vec<BstNode<T>>,
    pub(crate) root: Option<NodeId>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for BinarySearchTree<T> {
    type Output = BstNode<T>;
    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.0]
    }
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for `id`, or `None` if `id` belongs to a larger tree.
    pub fn node(&self, id: NodeId) -> Option<&BstNode<T>> {
        self.nodes.get(id.0)
    }

    pub fn value(&self, id: NodeId) -> &T {
        &self[id].value
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self[id].left
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self[id].right
    }

    /// Number of nodes on the longest root-to-leaf path; zero for an empty tree.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        let mut height = 0;
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self[id];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }

    /// Smallest value, found by following left links from the root.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(left) = self[current].left {
            current = left;
        }
        Some(self.value(current))
    }

    pub fn max(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self[current].right {
            current = right;
        }
        Some(self.value(current))
    }

    /// Node ids in ascending value order.
    pub fn iter_inorder(&self) -> InorderIter<'_, T> {
        InorderIter::new(self)
    }

    /// Values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter_inorder().map(|id| self.value(id))
    }

    /// Walks from `start` up to the root, `start` included.
    pub fn iter_ancestors(&self, start: NodeId) -> AncestorsIter<'_, T> {
        AncestorsIter::new(self, start)
    }

    fn push(&mut self, node: BstNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`, ignoring it if an equal value is already stored.
    pub fn insert(&mut self, value: T) -> Insertion {
        let Some(mut current) = self.root else {
            let id = self.push(BstNode::leaf(value, None));
            self.root = Some(id);
            return Insertion::Inserted(id);
        };

        loop {
            let node = &self[current];
            let (next, go_left) = match value.cmp(&node.value) {
                Ordering::Less => (node.left, true),
                Ordering::Greater => (node.right, false),
                Ordering::Equal => return Insertion::AlreadyPresent(current),
            };

            match next {
                Some(child) => current = child,
                None => {
                    let id = self.push(BstNode::leaf(value, Some(current)));
                    let parent = &mut self.nodes[current.0];
                    if go_left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return Insertion::Inserted(id);
                }
            }
        }
    }

    /// Finds the node holding `value`.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no root.
    pub fn search(&self, value: &T) -> Result<Option<NodeId>, TreeError> {
        let mut current = self.root.ok_or(TreeError::Empty)?;
        loop {
            let node = &self[current];
            let next = match value.cmp(&node.value) {
                Ordering::Equal => return Ok(Some(current)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        matches!(self.search(value), Ok(Some(_)))
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod test;
