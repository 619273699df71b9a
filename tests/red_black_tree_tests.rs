#![cfg(feature = "tree")]
//! Unit tests for the color-balanced tree.

use arbors::tree::{NodeColor, RedBlackTree, TreeError, TreeNode};
use rstest::rstest;

/// Walks the subtree and asserts no red node has a red child.
fn assert_no_red_red_violation(tree: &RedBlackTree<i32>, node: &TreeNode<i32, NodeColor>) {
    if tree.is_node_red(node) {
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert!(
                tree.is_node_black(&child),
                "red node {:?} has a red child {:?}",
                node.value(),
                child.value()
            );
        }
    }
    for child in [node.left(), node.right()].into_iter().flatten() {
        assert_no_red_red_violation(tree, &child);
    }
}

// =============================================================================
// Coloring Tests
// =============================================================================

#[rstest]
fn test_root_insert_is_black() {
    let mut tree = RedBlackTree::new();
    let root = tree.insert(10);

    assert!(tree.is_node_black(&root));
    assert!(!tree.is_node_red(&root));
    assert!(tree.is_node_colored(&root));
}

#[rstest]
fn test_non_root_inserts_start_red() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);
    let left = tree.insert(5);
    let right = tree.insert(15);

    assert!(tree.is_node_red(&left));
    assert!(tree.is_node_red(&right));
}

#[rstest]
fn test_uncolored_node_is_not_colored() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    let detached: TreeNode<i32, NodeColor> = TreeNode::new(1);

    assert!(!tree.is_node_colored(&detached));
    assert!(!tree.is_node_red(&detached));
    assert!(!tree.is_node_black(&detached));
}

// =============================================================================
// Recoloring Tests
// =============================================================================

#[rstest]
fn test_red_uncle_triggers_recoloring() {
    let mut tree = RedBlackTree::new();
    let root = tree.insert(10);
    let left = tree.insert(-10);
    let right = tree.insert(20);

    // Both children red under a black root.
    assert!(tree.is_node_red(&left));
    assert!(tree.is_node_red(&right));

    // The new node's uncle (20) is red: parent and uncle turn black, and
    // the grandparent is the root, so it stays black.
    let grand_left = tree.insert(-20);

    assert!(tree.is_node_black(&root));
    assert!(tree.is_node_black(&left));
    assert!(tree.is_node_black(&right));
    assert!(tree.is_node_red(&grand_left));

    assert_eq!(tree.to_string(), "-20,-10,10,20");
}

#[rstest]
fn test_black_parent_needs_no_fixup() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);
    tree.insert(-10);
    tree.insert(20);
    tree.insert(-20);

    // -10 is black now; a red child under it violates nothing.
    let node = tree.insert(6);

    assert!(tree.is_node_red(&node));
    assert_eq!(tree.to_string(), "-20,-10,6,10,20");
    assert_no_red_red_violation(&tree, tree.root());
}

// =============================================================================
// Rotation Tests
// =============================================================================

#[rstest]
fn test_black_uncle_triggers_rotation_with_color_swap() {
    let mut tree = RedBlackTree::new();
    for value in [10, -10, 20, -20, 25] {
        tree.insert(value);
    }

    // 30 lands under 25 (red parent) with no uncle on that side: a
    // right-right rotation promotes 25 over 20 and swaps their colors.
    tree.insert(30);

    assert_eq!(tree.to_string(), "-20,-10,10,20,25,30");
    assert!(tree.is_node_black(tree.root()));

    let promoted = tree.find(&25).unwrap();
    let demoted = tree.find(&20).unwrap();
    assert!(tree.is_node_black(&promoted));
    assert!(tree.is_node_red(&demoted));

    // The demoted node answers to the promoted one.
    assert_eq!(demoted.parent(), Some(promoted));
    assert_no_red_red_violation(&tree, tree.root());
}

#[rstest]
fn test_rotation_can_replace_the_tree_root() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);
    tree.insert(20);
    // Right-right case at the root: 20 is promoted and forced black.
    tree.insert(30);

    assert_eq!(tree.root().value(), Some(20));
    assert!(tree.is_node_black(tree.root()));
    assert_eq!(tree.to_string(), "10,20,30");

    let left = tree.find(&10).unwrap();
    let right = tree.find(&30).unwrap();
    assert!(tree.is_node_red(&left));
    assert!(tree.is_node_red(&right));
}

#[rstest]
fn test_left_left_rotation_at_the_root() {
    let mut tree = RedBlackTree::new();
    tree.insert(30);
    tree.insert(20);
    tree.insert(10);

    assert_eq!(tree.root().value(), Some(20));
    assert!(tree.is_node_black(tree.root()));
    assert_eq!(tree.to_string(), "10,20,30");
}

#[rstest]
fn test_double_rotation_cases() {
    // Left-right case.
    let mut tree = RedBlackTree::new();
    tree.insert(30);
    tree.insert(10);
    tree.insert(20);

    assert_eq!(tree.root().value(), Some(20));
    assert!(tree.is_node_black(tree.root()));
    assert_eq!(tree.to_string(), "10,20,30");

    // Right-left case.
    let mut mirrored = RedBlackTree::new();
    mirrored.insert(10);
    mirrored.insert(30);
    mirrored.insert(20);

    assert_eq!(mirrored.root().value(), Some(20));
    assert!(mirrored.is_node_black(mirrored.root()));
    assert_eq!(mirrored.to_string(), "10,20,30");
}

// =============================================================================
// Structure Tests
// =============================================================================

#[rstest]
fn test_keeps_bst_order_through_fixups() {
    let mut tree = RedBlackTree::new();
    for value in [10, -10, 20, -20, 25, 6, 30, 1, 4] {
        tree.insert(value);
    }

    assert_eq!(tree.to_string(), "-20,-10,1,4,6,10,20,25,30");
    assert!(tree.is_node_black(tree.root()));
    assert_no_red_red_violation(&tree, tree.root());
}

#[rstest]
fn test_parent_links_stay_consistent_after_fixups() {
    let mut tree = RedBlackTree::new();
    for value in [10, -10, 20, -20, 25, 6, 30, 1, 4] {
        tree.insert(value);
    }

    fn assert_children_answer_to_parent(node: &TreeNode<i32, NodeColor>) {
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert_eq!(child.parent().as_ref(), Some(node));
            assert_children_answer_to_parent(&child);
        }
    }
    assert_children_answer_to_parent(tree.root());
    assert!(tree.root().parent().is_none());
}

#[rstest]
fn test_duplicate_insert_changes_nothing() {
    let mut tree = RedBlackTree::new();
    for value in [10, -10, 20, -20] {
        tree.insert(value);
    }
    let before = tree.traverse_in_order();
    let left = tree.find(&-10).unwrap();
    assert!(tree.is_node_black(&left));

    let node = tree.insert(-10);

    // Same node, same color, same sequence.
    assert_eq!(node, left);
    assert!(tree.is_node_black(&node));
    assert_eq!(tree.traverse_in_order(), before);
}

#[rstest]
fn test_balance_factor_read_of_the_root() {
    let mut tree = RedBlackTree::new();
    for value in [10, 5, 20, 30] {
        tree.insert(value);
    }
    assert_eq!(tree.root().balance_factor(), -1);
}

// =============================================================================
// Unsupported Removal Tests
// =============================================================================

#[rstest]
fn test_remove_is_unsupported() {
    let mut tree = RedBlackTree::new();
    assert_eq!(tree.remove(&1), Err(TreeError::RemoveUnsupported));

    tree.insert(1);
    tree.insert(2);
    assert_eq!(tree.remove(&2), Err(TreeError::RemoveUnsupported));
    assert_eq!(tree.to_string(), "1,2");
}
