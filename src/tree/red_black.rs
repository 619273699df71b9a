//! Color-balanced (red-black-style) search tree.
//!
//! [`RedBlackTree`] layers the [`RedBlackBalance`] strategy over the ordered
//! search tree core. Each node carries a [`NodeColor`] tag as its metadata
//! payload, and every insert restores the red-black invariants:
//!
//! 1. Every node is red or black.
//! 2. The root is black.
//! 3. Missing children count as black leaves.
//! 4. A red node never has a red parent.
//! 5. Every root-to-leaf path holds the same number of black nodes.
//!
//! New nodes start red (a root insert starts black); the fixup then walks
//! upward recursively, recoloring when the uncle is red and rotating (with a
//! color swap of the rotated pair) when the uncle is black or absent.
//!
//! # Examples
//!
//! ```rust
//! use arbors::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! let first = tree.insert(10);
//! let second = tree.insert(15);
//!
//! assert!(tree.is_node_black(&first)); // the root is always black
//! assert!(tree.is_node_red(&second));
//! ```

use static_assertions::assert_impl_all;

use super::balance::{BalanceStrategy, BalancedTree};
use super::node::TreeNode;
use super::search::BinarySearchTree;

/// A self-balancing search tree maintaining the red-black invariants.
pub type RedBlackTree<T> = BalancedTree<T, RedBlackBalance>;

/// Node handle used by the color-balanced tree.
type RbNode<T> = TreeNode<T, NodeColor>;

// =============================================================================
// Color Tag
// =============================================================================

/// The color tag carried by every node of a [`RedBlackTree`].
///
/// `Unset` is the state of a node no strategy has touched yet; the fixup
/// colors every node it sees, so a settled tree contains only `Red` and
/// `Black` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeColor {
    /// Not yet colored.
    #[default]
    Unset,
    /// A red node.
    Red,
    /// A black node.
    Black,
}

assert_impl_all!(NodeColor: Copy, Default, Eq);

// =============================================================================
// Color Predicates
// =============================================================================

impl<T> RedBlackTree<T> {
    /// Returns `true` if the node is tagged red.
    #[must_use]
    pub fn is_node_red(&self, node: &RbNode<T>) -> bool {
        node.meta() == NodeColor::Red
    }

    /// Returns `true` if the node is tagged black.
    #[must_use]
    pub fn is_node_black(&self, node: &RbNode<T>) -> bool {
        node.meta() == NodeColor::Black
    }

    /// Returns `true` if the node carries any color tag.
    #[must_use]
    pub fn is_node_colored(&self, node: &RbNode<T>) -> bool {
        self.is_node_red(node) || self.is_node_black(node)
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// Post-insert fixup restoring the red-black invariants.
pub struct RedBlackBalance;

impl<T> BalanceStrategy<T> for RedBlackBalance {
    type Meta = NodeColor;

    fn after_insert(tree: &mut BinarySearchTree<T, NodeColor>, inserted: &RbNode<T>) {
        if *inserted == *tree.root() {
            // The root is always black.
            inserted.set_meta(NodeColor::Black);
        } else {
            // Every other new node starts red.
            inserted.set_meta(NodeColor::Red);
        }

        balance(tree, inserted);
    }
}

/// Checks the node against its parent and uncle and repairs any red-red
/// violation, recursing upward until the invariants hold.
fn balance<T>(tree: &mut BinarySearchTree<T, NodeColor>, node: &RbNode<T>) {
    if *node == *tree.root() {
        return;
    }
    if node.meta() == NodeColor::Black {
        // A black node participates in no red-red violation; in particular
        // the subtree root a rotation just blackened ends the fixup here.
        return;
    }

    let Some(parent) = node.parent() else {
        return;
    };
    if parent.meta() == NodeColor::Black {
        // A red (or freshly recolored) node under a black parent violates
        // nothing.
        return;
    }

    let grandparent = parent.parent();
    let red_uncle = node
        .uncle()
        .filter(|uncle| uncle.meta() == NodeColor::Red);

    if let Some(uncle) = red_uncle {
        // Red uncle: recolor and push the violation upward.
        uncle.set_meta(NodeColor::Black);
        parent.set_meta(NodeColor::Black);

        let Some(grandparent) = grandparent else {
            return;
        };
        if grandparent == *tree.root() {
            // The root stays black, and both its children were just
            // blackened, so the tree is already valid.
            return;
        }
        grandparent.set_meta(NodeColor::Red);
        balance(tree, &grandparent);
    } else if let Some(grandparent) = grandparent {
        // Black or absent uncle: rotate. The case is selected by which side
        // the parent is of the grandparent and which side the node is of
        // the parent.
        let parent_is_left = grandparent.left().is_some_and(|left| left == parent);
        let new_subtree_root = if parent_is_left {
            if parent.left().is_some_and(|left| left == *node) {
                left_left_rotation(&grandparent)
            } else {
                left_right_rotation(&grandparent)
            }
        } else if parent.right().is_some_and(|right| right == *node) {
            right_right_rotation(&grandparent)
        } else {
            right_left_rotation(&grandparent)
        };

        if new_subtree_root.parent().is_none() {
            // The rotation reached the top of the tree.
            tree.set_root(new_subtree_root.clone());
            new_subtree_root.set_meta(NodeColor::Black);
        }

        balance(tree, &new_subtree_root);
    }
}

// =============================================================================
// Rotations
// =============================================================================

/// Left-left case: the parent is the grandparent's left child and the
/// violating node is the parent's left child. Returns the subtree's new
/// root (the promoted parent).
fn left_left_rotation<T>(grandparent: &RbNode<T>) -> RbNode<T> {
    let Some(parent) = grandparent.left() else {
        return grandparent.clone();
    };
    let parent_right = parent.right();
    let great_grandparent = grandparent.parent();

    // Detach first, then re-wire, so child links and parent back-references
    // agree once the rotation completes.
    grandparent.set_left(None);
    parent.set_right(None);

    // The parent's right subtree moves into the grandparent's vacated slot.
    if let Some(parent_right) = parent_right {
        grandparent.set_left(Some(parent_right));
    }

    // The parent takes the grandparent's former position; when there is no
    // great-grandparent it stays detached and the caller promotes it to the
    // tree root.
    if let Some(great_grandparent) = great_grandparent {
        great_grandparent.replace_child(grandparent, &parent);
    }

    // The demoted grandparent becomes the parent's right child.
    parent.set_right(Some(grandparent.clone()));

    swap_colors(&parent, grandparent);
    parent
}

/// Right-right case; the mirror of [`left_left_rotation`].
fn right_right_rotation<T>(grandparent: &RbNode<T>) -> RbNode<T> {
    let Some(parent) = grandparent.right() else {
        return grandparent.clone();
    };
    let parent_left = parent.left();
    let great_grandparent = grandparent.parent();

    grandparent.set_right(None);
    parent.set_left(None);

    if let Some(parent_left) = parent_left {
        grandparent.set_right(Some(parent_left));
    }

    if let Some(great_grandparent) = great_grandparent {
        great_grandparent.replace_child(grandparent, &parent);
    }

    parent.set_left(Some(grandparent.clone()));

    swap_colors(&parent, grandparent);
    parent
}

/// Left-right case: the violating node is the parent's right child. The
/// pair is first restructured into left-left shape, then resolved by
/// [`left_left_rotation`].
fn left_right_rotation<T>(grandparent: &RbNode<T>) -> RbNode<T> {
    let Some(parent) = grandparent.left() else {
        return grandparent.clone();
    };
    let Some(child) = parent.right() else {
        return grandparent.clone();
    };
    let child_left = child.left();

    parent.set_right(None);
    child.set_left(None);

    // The child's left subtree re-homes onto the parent, which is about to
    // sink below the child.
    if let Some(child_left) = child_left {
        parent.set_right(Some(child_left));
    }

    grandparent.set_left(Some(child.clone()));
    child.set_left(Some(parent));

    left_left_rotation(grandparent)
}

/// Right-left case; the mirror of [`left_right_rotation`].
fn right_left_rotation<T>(grandparent: &RbNode<T>) -> RbNode<T> {
    let Some(parent) = grandparent.right() else {
        return grandparent.clone();
    };
    let Some(child) = parent.left() else {
        return grandparent.clone();
    };
    let child_right = child.right();

    parent.set_left(None);
    child.set_right(None);

    if let Some(child_right) = child_right {
        parent.set_left(Some(child_right));
    }

    grandparent.set_right(Some(child.clone()));
    child.set_right(Some(parent));

    right_right_rotation(grandparent)
}

/// Exchanges the color tags of the rotated pair.
fn swap_colors<T>(first: &RbNode<T>, second: &RbNode<T>) {
    let first_color = first.meta();
    first.set_meta(second.meta());
    second.set_meta(first_color);
}
