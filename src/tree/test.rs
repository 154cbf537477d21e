use proptest::prelude::*;
use similar_asserts::assert_eq;

use super::*;

fn sample() -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    for v in [5, 6, 8, 700, 2, -22] {
        assert!(tree.insert(v).is_inserted());
    }
    tree
}

#[test]
fn empty_tree() {
    let tree: BinarySearchTree<i32> = BinarySearchTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.search(&1), Err(TreeError::Empty));
    assert!(!tree.contains(&1));
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.iter_inorder().count(), 0);
}

#[test]
fn shape_after_inserts() {
    let tree = sample();
    let root = tree.root().unwrap();
    assert_eq!(*tree.value(root), 5);
    assert_eq!(tree.parent(root), None);

    let left = tree.left(root).unwrap();
    let right = tree.right(root).unwrap();
    assert_eq!(*tree.value(left), 2);
    assert_eq!(*tree.value(right), 6);
    assert_eq!(tree.value(tree.left(left).unwrap()), &-22);
    assert_eq!(tree.left(right), None);

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.min(), Some(&-22));
    assert_eq!(tree.max(), Some(&700));
}

#[test]
fn duplicates_are_ignored() {
    let mut tree = sample();
    let existing = tree.search(&8).unwrap().unwrap();
    assert_eq!(tree.insert(8), Insertion::AlreadyPresent(existing));
    assert_eq!(tree.len(), 6);
}

#[test]
fn search_and_ancestors() {
    let tree = sample();
    let deepest = tree.search(&700).unwrap().unwrap();
    let path: Vec<i32> = tree
        .iter_ancestors(deepest)
        .map(|id| *tree.value(id))
        .collect();
    assert_eq!(path, vec![700, 8, 6, 5]);

    assert_eq!(tree.search(&7), Ok(None));
    assert!(tree.node(deepest).unwrap().is_leaf());
    assert_eq!(tree.node(NodeId::from(99)), None);
}

#[test]
fn inorder_values() {
    let tree = sample();
    let values: Vec<i32> = tree.values().copied().collect();
    assert_eq!(values, vec![-22, 2, 5, 6, 8, 700]);
}

proptest! {
    #[test]
    fn inorder_is_sorted_and_links_agree(values in prop::collection::vec(-50i32..50, 0..60)) {
        let tree: BinarySearchTree<i32> = values.iter().copied().collect();

        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        let inorder: Vec<i32> = tree.values().copied().collect();
        prop_assert_eq!(&inorder, &expected);
        prop_assert_eq!(tree.len(), expected.len());

        for id in tree.iter_inorder() {
            let node = &tree[id];
            for child in [node.left(), node.right()].into_iter().flatten() {
                prop_assert_eq!(tree.parent(child), Some(id));
            }
            match node.parent() {
                None => prop_assert_eq!(tree.root(), Some(id)),
                Some(p) => prop_assert!(tree.left(p) == Some(id) || tree.right(p) == Some(id)),
            }
        }

        for v in &values {
            prop_assert!(tree.contains(v));
        }
    }
}
