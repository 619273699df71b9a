//! Height-balanced (AVL-style) search tree.
//!
//! [`AvlTree`] layers the [`AvlBalance`] strategy over the ordered search
//! tree core: after every insert it walks from the new node up to the root
//! and fixes any node whose balance factor has left the `{-1, 0, 1}`
//! envelope with one of the four rotation patterns (left-left, left-right,
//! right-right, right-left).
//!
//! Rotations re-wire existing nodes only; no nodes are created or destroyed
//! while rebalancing, and the in-order value sequence is unchanged by
//! construction.
//!
//! # Examples
//!
//! ```rust
//! use arbors::tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(4);
//! tree.insert(3);
//! tree.insert(2); // triggers a left-left rotation at the root
//!
//! assert_eq!(tree.to_string(), "2,3,4");
//! assert_eq!(tree.root().value(), Some(3));
//! assert_eq!(tree.root().height(), 1);
//! ```

use super::balance::{BalanceStrategy, BalancedTree};
use super::node::TreeNode;
use super::search::BinarySearchTree;

/// A self-balancing search tree maintaining the AVL height invariant.
pub type AvlTree<T> = BalancedTree<T, AvlBalance>;

/// Node handle used by the height-balanced tree (no metadata payload).
type AvlNode<T> = TreeNode<T, ()>;

// =============================================================================
// Strategy
// =============================================================================

/// Post-insert fixup restoring the AVL balance-factor envelope.
pub struct AvlBalance;

impl<T> BalanceStrategy<T> for AvlBalance {
    type Meta = ();

    fn after_insert(tree: &mut BinarySearchTree<T, ()>, inserted: &AvlNode<T>) {
        // Walk from the inserted node up to the root, rebalancing every node
        // on the way. A rotation re-parents the current node, so the parent
        // is re-read after each step.
        let mut current = Some(inserted.clone());
        while let Some(node) = current {
            balance_node(tree, &node);
            current = node.parent();
        }
    }
}

fn balance_node<T>(tree: &mut BinarySearchTree<T, ()>, node: &AvlNode<T>) {
    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        if let Some(left) = node.left() {
            if left.balance_factor() >= 0 {
                rotate_left_left(tree, node);
            } else {
                rotate_left_right(tree, node);
            }
        }
    } else if balance_factor < -1 {
        if let Some(right) = node.right() {
            if right.balance_factor() <= 0 {
                rotate_right_right(tree, node);
            } else {
                rotate_right_left(tree, node);
            }
        }
    }
}

// =============================================================================
// Rotations
// =============================================================================

/// Single right rotation: the left child is promoted into the rotation
/// root's former position.
fn rotate_left_left<T>(tree: &mut BinarySearchTree<T, ()>, root_node: &AvlNode<T>) {
    let Some(left_node) = root_node.left() else {
        return;
    };
    let left_right = left_node.right();

    // Detach the pivot and its right subtree before re-wiring, so every
    // parent back-reference ends up agreeing with the child links.
    root_node.set_left(None);
    left_node.set_right(None);

    // The pivot's right subtree moves into the vacated slot.
    if let Some(left_right) = left_right {
        root_node.set_left(Some(left_right));
    }

    // Promote the pivot into the rotation root's former position, either
    // under its parent (on whichever side the rotation root occupied) or as
    // the new tree root.
    match root_node.parent() {
        Some(parent) => {
            parent.replace_child(root_node, &left_node);
        }
        None => tree.set_root(left_node.clone()),
    }

    // The old rotation root becomes the pivot's right child.
    left_node.set_right(Some(root_node.clone()));
}

/// Single left rotation; the mirror of [`rotate_left_left`].
fn rotate_right_right<T>(tree: &mut BinarySearchTree<T, ()>, root_node: &AvlNode<T>) {
    let Some(right_node) = root_node.right() else {
        return;
    };
    let right_left = right_node.left();

    root_node.set_right(None);
    right_node.set_left(None);

    if let Some(right_left) = right_left {
        root_node.set_right(Some(right_left));
    }

    match root_node.parent() {
        Some(parent) => {
            parent.replace_child(root_node, &right_node);
        }
        None => tree.set_root(right_node.clone()),
    }

    right_node.set_left(Some(root_node.clone()));
}

/// Double rotation: rotate the left subtree left, then the rotation root
/// right.
fn rotate_left_right<T>(tree: &mut BinarySearchTree<T, ()>, root_node: &AvlNode<T>) {
    let Some(left_node) = root_node.left() else {
        return;
    };
    let Some(left_right_node) = left_node.right() else {
        return;
    };
    let left_right_left = left_right_node.left();

    root_node.set_left(None);
    left_node.set_right(None);
    left_right_node.set_left(None);

    // Keep the left-right node's left subtree: it re-homes onto the left
    // node, which is about to sink below it.
    if let Some(left_right_left) = left_right_left {
        left_node.set_right(Some(left_right_left));
    }

    root_node.set_left(Some(left_right_node.clone()));
    left_right_node.set_left(Some(left_node));

    // The subtree is now in left-left shape.
    rotate_left_left(tree, root_node);
}

/// Double rotation; the mirror of [`rotate_left_right`].
fn rotate_right_left<T>(tree: &mut BinarySearchTree<T, ()>, root_node: &AvlNode<T>) {
    let Some(right_node) = root_node.right() else {
        return;
    };
    let Some(right_left_node) = right_node.left() else {
        return;
    };
    let right_left_right = right_left_node.right();

    root_node.set_right(None);
    right_node.set_left(None);
    right_left_node.set_right(None);

    if let Some(right_left_right) = right_left_right {
        right_node.set_left(Some(right_left_right));
    }

    root_node.set_right(Some(right_left_node.clone()));
    right_left_node.set_right(Some(right_node));

    rotate_right_right(tree, root_node);
}
