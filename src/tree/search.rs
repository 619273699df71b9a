//! Ordered binary search tree core.
//!
//! [`BinarySearchTree`] implements comparator-guided insert, lookup, and
//! removal over [`TreeNode`]s. It is generic over the node metadata payload
//! `M` so the balancing layers ([`AvlTree`](crate::tree::AvlTree),
//! [`RedBlackTree`](crate::tree::RedBlackTree)) can reuse the structural
//! operations unchanged while attaching their own per-node bookkeeping.
//!
//! The root node is created once, at construction, holding the sentinel
//! "no value" marker; the first insert fills it in place, so the tree always
//! has a live root node. Duplicate values are rejected: inserting a value
//! already present returns the existing node and mutates nothing.
//!
//! # Examples
//!
//! ```rust
//! use arbors::tree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
//! for value in [10, 20, 5, 30, 15, 25] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.contains(&15));
//! assert_eq!(tree.to_string(), "5,10,15,20,25,30");
//!
//! tree.remove(&20).unwrap();
//! assert_eq!(tree.to_string(), "5,10,15,25,30");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::Comparator;

use super::error::TreeError;
use super::node::TreeNode;

// =============================================================================
// Tree Definition
// =============================================================================

/// An ordered binary search tree.
///
/// | Operation  | Complexity  |
/// |------------|-------------|
/// | `insert`   | O(height)   |
/// | `find`     | O(height)   |
/// | `contains` | O(height)   |
/// | `remove`   | O(height)   |
/// | `find_min` | O(height)   |
///
/// The plain search tree performs no rebalancing, so the height is bounded
/// only by the insertion order; the balanced variants keep it logarithmic.
pub struct BinarySearchTree<T, M = ()> {
    root: TreeNode<T, M>,
    comparator: Comparator<T>,
}

impl<T: Ord + 'static, M: Default> BinarySearchTree<T, M> {
    /// Creates an empty tree ordered by the natural ordering of `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord + 'static, M: Default> Default for BinarySearchTree<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M: Default> BinarySearchTree<T, M> {
    /// Creates an empty tree ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbors::compare::Comparator;
    /// use arbors::tree::BinarySearchTree;
    ///
    /// let descending = Comparator::new(|a: &i32, b: &i32| b.cmp(a));
    /// let mut tree: BinarySearchTree<i32> = BinarySearchTree::with_comparator(descending);
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert(2);
    /// assert_eq!(tree.to_string(), "3,2,1");
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            root: TreeNode::sentinel(),
            comparator,
        }
    }

    /// Inserts `value`, returning a handle to its node.
    ///
    /// If the value is already present, the existing node is returned and
    /// the tree is left unchanged.
    pub fn insert(&mut self, value: T) -> TreeNode<T, M> {
        self.insert_with_status(value).0
    }

    /// Inserts `value`, additionally reporting whether a new node was
    /// attached (`false` for a duplicate). The balancing layers use the
    /// status to skip their fixup for duplicates.
    pub(crate) fn insert_with_status(&mut self, value: T) -> (TreeNode<T, M>, bool) {
        if !self.root.has_value() {
            self.root.set_value(value);
            return (self.root.clone(), true);
        }

        let mut current = self.root.clone();
        loop {
            let Some(ordering) =
                current.with_value(|node_value| {
                    node_value.map(|node_value| self.comparator.compare(&value, node_value))
                })
            else {
                // Only the root may hold the sentinel, and it was handled above.
                return (current, false);
            };

            match ordering {
                Ordering::Less => match current.left() {
                    Some(left) => current = left,
                    None => {
                        let node = TreeNode::new(value);
                        current.set_left(Some(node.clone()));
                        return (node, true);
                    }
                },
                Ordering::Greater => match current.right() {
                    Some(right) => current = right,
                    None => {
                        let node = TreeNode::new(value);
                        current.set_right(Some(node.clone()));
                        return (node, true);
                    }
                },
                Ordering::Equal => return (current, false),
            }
        }
    }
}

impl<T, M> BinarySearchTree<T, M> {
    /// Returns the node holding `value`, if present.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<TreeNode<T, M>> {
        if !self.root.has_value() {
            return None;
        }

        let mut current = self.root.clone();
        loop {
            let ordering = current.with_value(|node_value| {
                node_value.map(|node_value| self.comparator.compare(value, node_value))
            })?;

            match ordering {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = current.left()?,
                Ordering::Greater => current = current.right()?,
            }
        }
    }

    /// Returns `true` if `value` is present in the tree.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the node holding the smallest value, or `None` for an empty
    /// tree.
    #[must_use]
    pub fn find_min(&self) -> Option<TreeNode<T, M>> {
        if !self.root.has_value() {
            return None;
        }
        Some(Self::find_min_node(&self.root))
    }

    /// Leftmost descendant of `node` (the subtree's minimum).
    pub(crate) fn find_min_node(node: &TreeNode<T, M>) -> TreeNode<T, M> {
        let mut current = node.clone();
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// Returns a handle to the root node.
    ///
    /// The root is always a live node; for an empty tree it holds the
    /// sentinel and [`TreeNode::has_value`] returns `false`.
    #[must_use]
    pub fn root(&self) -> &TreeNode<T, M> {
        &self.root
    }

    /// Replaces the tree's root handle after a rotation promoted another
    /// node into the top position.
    pub(crate) fn set_root(&mut self, node: TreeNode<T, M>) {
        self.root = node;
    }

    /// Returns a reference to the tree's comparator.
    #[must_use]
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }
}

impl<T: Clone, M> BinarySearchTree<T, M> {
    /// Collects the tree's values in ascending order.
    #[must_use]
    pub fn traverse_in_order(&self) -> Vec<T> {
        self.root.traverse_in_order()
    }

    /// Removes `value` from the tree.
    ///
    /// Distinguishes the three structural cases: a leaf is detached from its
    /// parent (or, for the unparented root, reverts to the sentinel); a node
    /// with two children is overwritten with its in-order successor's value
    /// after the successor is removed; a node with one child has the child
    /// spliced into its place (the unparented root instead absorbs the
    /// child in place, so the root's object identity never changes).
    ///
    /// # Errors
    ///
    /// [`TreeError::ValueNotFound`] when the value is not in the tree.
    pub fn remove(&mut self, value: &T) -> Result<bool, TreeError> {
        let node_to_remove = self.find(value).ok_or(TreeError::ValueNotFound)?;
        let parent = node_to_remove.parent();

        match (node_to_remove.left(), node_to_remove.right()) {
            (None, None) => {
                if let Some(parent) = &parent {
                    parent.remove_child(&node_to_remove);
                } else {
                    // Unparented root leaf: revert to the sentinel in place.
                    node_to_remove.take_value();
                }
            }
            (Some(_), Some(right)) => {
                let next_bigger = Self::find_min_node(&right);
                if next_bigger == right {
                    // The right child has no left subtree: splice it in.
                    if let Some(right_value) = right.value() {
                        node_to_remove.set_value(right_value);
                    }
                    node_to_remove.set_right(right.right());
                } else if let Some(next_value) = next_bigger.value() {
                    self.remove(&next_value)?;
                    node_to_remove.set_value(next_value);
                }
            }
            (Some(child), None) | (None, Some(child)) => {
                if let Some(parent) = &parent {
                    parent.replace_child(&node_to_remove, &child);
                } else {
                    // Removing the unparented root: keep its identity, absorb
                    // the child's value and children.
                    TreeNode::copy_node(&child, &node_to_remove);
                }
            }
        }

        // Every node that left the tree had its parent back-reference
        // cleared by the detaching operation that removed it; a node that
        // merely absorbed its successor's value keeps its position and its
        // back-reference.
        Ok(true)
    }
}

impl<T: fmt::Display, M> fmt::Display for BinarySearchTree<T, M> {
    /// Renders the in-order value sequence, comma-joined.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, formatter)
    }
}
