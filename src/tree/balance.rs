//! Composition seam between the search-tree core and its balancing layers.
//!
//! A [`BalanceStrategy`] is a post-insert fixup invoked after the ordered
//! core attaches a new node. [`BalancedTree`] pairs the core with one
//! strategy, chosen at the type level, so each balancing algorithm is
//! independently testable against the same structural operations:
//!
//! - [`AvlTree`](crate::tree::AvlTree) = `BalancedTree<T, AvlBalance>`
//! - [`RedBlackTree`](crate::tree::RedBlackTree) = `BalancedTree<T, RedBlackBalance>`
//!
//! The strategy also picks the per-node metadata payload through its `Meta`
//! associated type: the height-balanced strategy needs none (`()`), the
//! color-balanced strategy stores a color tag.
//!
//! Duplicate inserts never reach the strategy: the core reports whether a
//! node was actually attached, and the fixup runs only when one was, so
//! inserting an already-present value leaves the tree byte-for-byte
//! unchanged.

use std::fmt;
use std::marker::PhantomData;

use crate::compare::Comparator;

use super::error::TreeError;
use super::node::TreeNode;
use super::search::BinarySearchTree;

// =============================================================================
// Strategy Trait
// =============================================================================

/// A post-insert rebalancing strategy for an ordered search tree.
pub trait BalanceStrategy<T> {
    /// Per-node metadata the strategy needs (e.g. a color tag).
    type Meta: Default;

    /// Restores the strategy's invariants after `inserted` was attached.
    ///
    /// Called only for genuinely new nodes, never for duplicate inserts.
    /// The strategy may re-wire the tree structure (rotations) and replace
    /// the tree's root.
    fn after_insert(tree: &mut BinarySearchTree<T, Self::Meta>, inserted: &TreeNode<T, Self::Meta>);
}

// =============================================================================
// Balanced Tree Wrapper
// =============================================================================

/// An ordered search tree kept balanced by the strategy `S`.
///
/// Exposes the same lookup surface as [`BinarySearchTree`]; `insert` runs
/// the strategy's fixup after each structural insertion, and `remove` is an
/// explicitly unsupported operation on every balanced variant (the
/// rebalance-on-delete path is intentionally not implemented).
pub struct BalancedTree<T, S: BalanceStrategy<T>> {
    pub(crate) tree: BinarySearchTree<T, S::Meta>,
    strategy: PhantomData<S>,
}

impl<T: Ord + 'static, S: BalanceStrategy<T>> BalancedTree<T, S> {
    /// Creates an empty tree ordered by the natural ordering of `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord + 'static, S: BalanceStrategy<T>> Default for BalancedTree<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: BalanceStrategy<T>> BalancedTree<T, S> {
    /// Creates an empty tree ordered by the given comparator.
    #[must_use]
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            tree: BinarySearchTree::with_comparator(comparator),
            strategy: PhantomData,
        }
    }

    /// Inserts `value` and rebalances, returning a handle to its node.
    ///
    /// A duplicate insert returns the existing node and changes nothing.
    pub fn insert(&mut self, value: T) -> TreeNode<T, S::Meta> {
        let (node, attached) = self.tree.insert_with_status(value);
        if attached {
            S::after_insert(&mut self.tree, &node);
        }
        node
    }

    /// Removal is not supported on balanced trees.
    ///
    /// # Errors
    ///
    /// Always fails with [`TreeError::RemoveUnsupported`], regardless of the
    /// tree's contents.
    pub fn remove(&mut self, _value: &T) -> Result<bool, TreeError> {
        Err(TreeError::RemoveUnsupported)
    }

    /// Returns the node holding `value`, if present.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<TreeNode<T, S::Meta>> {
        self.tree.find(value)
    }

    /// Returns `true` if `value` is present in the tree.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    /// Returns the node holding the smallest value, or `None` when empty.
    #[must_use]
    pub fn find_min(&self) -> Option<TreeNode<T, S::Meta>> {
        self.tree.find_min()
    }

    /// Returns a handle to the root node.
    #[must_use]
    pub fn root(&self) -> &TreeNode<T, S::Meta> {
        self.tree.root()
    }
}

impl<T: Clone, S: BalanceStrategy<T>> BalancedTree<T, S> {
    /// Collects the tree's values in ascending order.
    #[must_use]
    pub fn traverse_in_order(&self) -> Vec<T> {
        self.tree.traverse_in_order()
    }
}

impl<T: fmt::Display, S: BalanceStrategy<T>> fmt::Display for BalancedTree<T, S> {
    /// Renders the in-order value sequence, comma-joined.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, formatter)
    }
}
