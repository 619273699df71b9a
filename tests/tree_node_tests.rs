#![cfg(feature = "tree")]
//! Unit tests for the shared tree node.

use arbors::tree::{NodeColor, TreeNode};
use rstest::rstest;

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_node_has_value_and_no_children() {
    let node: TreeNode<i32> = TreeNode::new(2);

    assert_eq!(node.value(), Some(2));
    assert!(node.has_value());
    assert!(node.left().is_none());
    assert!(node.right().is_none());
    assert!(node.parent().is_none());
}

#[rstest]
fn test_sentinel_node_has_no_value() {
    let node: TreeNode<i32> = TreeNode::sentinel();

    assert_eq!(node.value(), None);
    assert!(!node.has_value());
}

#[rstest]
fn test_set_children() {
    let root: TreeNode<i32> = TreeNode::new(2);
    root.set_left(Some(TreeNode::new(1)));
    root.set_right(Some(TreeNode::new(3)));

    assert_eq!(root.value(), Some(2));
    assert_eq!(root.left().and_then(|left| left.value()), Some(1));
    assert_eq!(root.right().and_then(|right| right.value()), Some(3));
}

// =============================================================================
// Parent Back-Reference Tests
// =============================================================================

#[rstest]
fn test_children_get_parent_stamped() {
    let root: TreeNode<i32> = TreeNode::new(2);
    let left = TreeNode::new(1);
    let right = TreeNode::new(3);
    root.set_left(Some(left.clone()));
    root.set_right(Some(right.clone()));

    assert!(root.parent().is_none());
    assert_eq!(left.parent(), Some(root.clone()));
    assert_eq!(right.parent(), Some(root.clone()));
    assert_eq!(right.parent().and_then(|parent| parent.value()), Some(2));
}

#[rstest]
fn test_replacing_a_child_clears_the_old_back_reference() {
    let root: TreeNode<i32> = TreeNode::new(2);
    let first = TreeNode::new(1);
    root.set_left(Some(first.clone()));

    let second = TreeNode::new(0);
    root.set_left(Some(second.clone()));

    assert!(first.parent().is_none());
    assert_eq!(second.parent(), Some(root));
}

#[rstest]
fn test_setting_child_to_none_detaches_it() {
    let root: TreeNode<i32> = TreeNode::new(2);
    let left = TreeNode::new(1);
    root.set_left(Some(left.clone()));

    root.set_left(None);

    assert!(root.left().is_none());
    assert!(left.parent().is_none());
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[rstest]
fn test_traverse_in_order() {
    let root: TreeNode<i32> = TreeNode::new(2);
    root.set_left(Some(TreeNode::new(1)));
    root.set_right(Some(TreeNode::new(3)));

    assert_eq!(root.traverse_in_order(), vec![1, 2, 3]);
    assert_eq!(root.to_string(), "1,2,3");
}

#[rstest]
fn test_sentinel_traverses_to_nothing() {
    let root: TreeNode<i32> = TreeNode::sentinel();

    assert!(root.traverse_in_order().is_empty());
    assert_eq!(root.to_string(), "");
}

// =============================================================================
// Remove Child Tests
// =============================================================================

#[rstest]
fn test_remove_child() {
    let root: TreeNode<i32> = TreeNode::new(2);
    let left = TreeNode::new(1);
    let right = TreeNode::new(3);
    root.set_left(Some(left.clone()));
    root.set_right(Some(right.clone()));

    assert_eq!(root.traverse_in_order(), vec![1, 2, 3]);

    assert!(root.remove_child(&left));
    assert_eq!(root.traverse_in_order(), vec![2, 3]);
    assert!(left.parent().is_none());

    assert!(root.remove_child(&right));
    assert_eq!(root.traverse_in_order(), vec![2]);

    // Already removed: nothing to detach.
    assert!(!root.remove_child(&right));
    assert_eq!(root.traverse_in_order(), vec![2]);
}

#[rstest]
fn test_remove_child_matches_by_identity_not_value() {
    let root: TreeNode<i32> = TreeNode::new(2);
    root.set_left(Some(TreeNode::new(1)));

    let impostor = TreeNode::new(1);
    assert!(!root.remove_child(&impostor));
    assert_eq!(root.traverse_in_order(), vec![1, 2]);
}

// =============================================================================
// Replace Child Tests
// =============================================================================

#[rstest]
fn test_replace_child() {
    let root: TreeNode<i32> = TreeNode::new(2);
    let left = TreeNode::new(1);
    let right = TreeNode::new(3);
    root.set_left(Some(left.clone()));
    root.set_right(Some(right.clone()));

    let replacement = TreeNode::new(5);
    assert!(root.replace_child(&right, &replacement));

    assert_eq!(root.traverse_in_order(), vec![1, 2, 5]);
    assert_eq!(replacement.parent(), Some(root.clone()));
    assert!(right.parent().is_none());

    let unknown = TreeNode::new(7);
    assert!(!root.replace_child(&right, &unknown));
}

// =============================================================================
// Derived Quantity Tests
// =============================================================================

#[rstest]
fn test_heights_and_balance_factor() {
    let root: TreeNode<i32> = TreeNode::new(1);
    let left = TreeNode::new(3);
    let right = TreeNode::new(2);
    let grand_left = TreeNode::new(5);
    let grand_right = TreeNode::new(4);

    root.set_left(Some(left.clone()));
    root.set_right(Some(right.clone()));
    left.set_left(Some(grand_left.clone()));
    left.set_right(Some(grand_right));

    assert_eq!(root.height(), 2);
    assert_eq!(root.left_height(), 2);
    assert_eq!(root.right_height(), 1);
    assert_eq!(root.balance_factor(), 1);
    assert_eq!(left.height(), 1);
    assert_eq!(right.height(), 0);

    // Heights are derived, so extending the structure is reflected
    // immediately.
    grand_left.set_left(Some(TreeNode::new(6)));
    assert_eq!(root.height(), 3);
    assert_eq!(root.balance_factor(), 2);
}

#[rstest]
fn test_uncle_on_the_right() {
    let grandparent: TreeNode<i32> = TreeNode::new(10);
    let parent = TreeNode::new(5);
    let uncle = TreeNode::new(15);
    let child = TreeNode::new(3);

    grandparent.set_left(Some(parent.clone()));
    grandparent.set_right(Some(uncle.clone()));
    parent.set_left(Some(child.clone()));

    assert_eq!(child.uncle(), Some(uncle));
}

#[rstest]
fn test_uncle_on_the_left() {
    let grandparent: TreeNode<i32> = TreeNode::new(10);
    let parent = TreeNode::new(15);
    let uncle = TreeNode::new(5);
    let child = TreeNode::new(20);

    grandparent.set_right(Some(parent.clone()));
    grandparent.set_left(Some(uncle.clone()));
    parent.set_right(Some(child.clone()));

    assert_eq!(child.uncle(), Some(uncle));
}

#[rstest]
fn test_no_uncle_without_grandparent_or_sibling() {
    let root: TreeNode<i32> = TreeNode::new(10);
    let parent = TreeNode::new(5);
    let child = TreeNode::new(3);

    // No parent at all.
    assert!(root.uncle().is_none());

    root.set_left(Some(parent.clone()));
    // Parent but no grandparent.
    assert!(parent.uncle().is_none());

    parent.set_left(Some(child.clone()));
    // Grandparent lacks a second child.
    assert!(child.uncle().is_none());
}

// =============================================================================
// Value, Metadata & Copy Tests
// =============================================================================

#[rstest]
fn test_set_and_take_value() {
    let node: TreeNode<i32> = TreeNode::new(1);
    node.set_value(10);
    assert_eq!(node.value(), Some(10));

    assert_eq!(node.take_value(), Some(10));
    assert!(!node.has_value());
}

#[rstest]
fn test_metadata_payload() {
    let node: TreeNode<i32, NodeColor> = TreeNode::new(1);
    assert_eq!(node.meta(), NodeColor::Unset);

    node.set_meta(NodeColor::Red);
    assert_eq!(node.meta(), NodeColor::Red);
}

#[rstest]
fn test_copy_node_moves_value_and_children() {
    let source: TreeNode<i32> = TreeNode::new(10);
    source.set_left(Some(TreeNode::new(5)));
    source.set_right(Some(TreeNode::new(15)));

    let target: TreeNode<i32> = TreeNode::new(0);
    TreeNode::copy_node(&source, &target);

    assert_eq!(target.value(), Some(10));
    assert_eq!(target.traverse_in_order(), vec![5, 10, 15]);
    // The children now answer to the target.
    assert_eq!(
        target.left().and_then(|left| left.parent()),
        Some(target.clone())
    );
}

// =============================================================================
// Handle Semantics Tests
// =============================================================================

#[rstest]
fn test_handle_equality_is_identity() {
    let node: TreeNode<i32> = TreeNode::new(1);
    let same = node.clone();
    let other: TreeNode<i32> = TreeNode::new(1);

    assert_eq!(node, same);
    assert_ne!(node, other);
}
