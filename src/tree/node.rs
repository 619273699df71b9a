//! Shared node abstraction for every binary tree in the crate.
//!
//! [`TreeNode`] is a cheaply clonable handle (`Rc<RefCell<..>>`) to a node
//! that owns up to two children, keeps a non-owning [`Weak`] back-reference
//! to its parent, and carries a metadata payload `M` alongside the value.
//! The search tree core uses `M = ()`; the color-balanced tree instantiates
//! `M = NodeColor` so the generic node stays free of any one strategy's
//! bookkeeping.
//!
//! Two representation choices matter here:
//!
//! - The tree exclusively owns its children; the parent link is a `Weak`
//!   handle used only for upward traversal, so no ownership cycle ever
//!   forms. Every re-parenting operation clears the old back-reference
//!   before installing the new one.
//! - A node's value is `Option<T>`: `None` is the sentinel "empty" marker a
//!   tree root holds before the first insert. Only a root ever carries the
//!   sentinel.
//!
//! Heights, balance factors, and the uncle lookup are derived from the live
//! structure on every call, never cached, so they cannot go stale across
//! rotations.
//!
//! # Examples
//!
//! ```rust
//! use arbors::tree::TreeNode;
//!
//! let root: TreeNode<i32> = TreeNode::new(2);
//! root.set_left(Some(TreeNode::new(1)));
//! root.set_right(Some(TreeNode::new(3)));
//!
//! assert_eq!(root.traverse_in_order(), vec![1, 2, 3]);
//! assert_eq!(root.to_string(), "1,2,3");
//! assert_eq!(root.height(), 1);
//! assert_eq!(root.left().and_then(|left| left.parent()), Some(root.clone()));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

// =============================================================================
// Node Definition
// =============================================================================

/// Interior state behind a node handle.
struct NodeInner<T, M> {
    value: Option<T>,
    left: Option<TreeNode<T, M>>,
    right: Option<TreeNode<T, M>>,
    parent: Weak<RefCell<NodeInner<T, M>>>,
    meta: M,
}

/// A handle to a binary tree node.
///
/// Cloning a `TreeNode` clones the handle, not the node: both handles refer
/// to the same live node, and equality between handles is node identity.
/// Structural mutation therefore goes through `&self` methods; the interior
/// state is single-threaded (`Rc`/`RefCell`, see the crate documentation on
/// the concurrency model).
pub struct TreeNode<T, M = ()> {
    inner: Rc<RefCell<NodeInner<T, M>>>,
}

impl<T, M: Default> TreeNode<T, M> {
    /// Creates a node holding `value`, with no children and no parent.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::from_value(Some(value))
    }

    /// Creates a node holding the sentinel "no value" marker.
    ///
    /// Trees use one of these as the root of an empty tree; the first insert
    /// fills it in place.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::from_value(None)
    }

    fn from_value(value: Option<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeInner {
                value,
                left: None,
                right: None,
                parent: Weak::new(),
                meta: M::default(),
            })),
        }
    }
}

// =============================================================================
// Value & Metadata Access
// =============================================================================

impl<T, M> TreeNode<T, M> {
    /// Returns `true` if the node holds a value (i.e. is not the sentinel).
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.inner.borrow().value.is_some()
    }

    /// Overwrites the node's value in place.
    pub fn set_value(&self, value: T) {
        self.inner.borrow_mut().value = Some(value);
    }

    /// Removes and returns the node's value, leaving the sentinel behind.
    pub fn take_value(&self) -> Option<T> {
        self.inner.borrow_mut().value.take()
    }

    /// Replaces the node's metadata payload.
    pub fn set_meta(&self, meta: M) {
        self.inner.borrow_mut().meta = meta;
    }

    /// Reads the node's value by reference, without cloning.
    pub(crate) fn with_value<R>(&self, read: impl FnOnce(Option<&T>) -> R) -> R {
        read(self.inner.borrow().value.as_ref())
    }
}

impl<T: Clone, M> TreeNode<T, M> {
    /// Returns a copy of the node's value, or `None` for the sentinel.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.inner.borrow().value.clone()
    }
}

impl<T, M: Clone> TreeNode<T, M> {
    /// Returns a copy of the node's metadata payload.
    #[must_use]
    pub fn meta(&self) -> M {
        self.inner.borrow().meta.clone()
    }
}

// =============================================================================
// Structure Access & Mutation
// =============================================================================

impl<T, M> TreeNode<T, M> {
    /// Returns a handle to the left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.inner.borrow().left.clone()
    }

    /// Returns a handle to the right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.inner.borrow().right.clone()
    }

    /// Returns a handle to the parent, if the node is attached to one.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent = self.inner.borrow().parent.upgrade()?;
        Some(Self { inner: parent })
    }

    /// Installs `node` as the left child.
    ///
    /// The previous left child, if any, has its parent back-reference
    /// cleared before the new child is installed and stamped with this node
    /// as its parent.
    pub fn set_left(&self, node: Option<Self>) {
        if let Some(previous) = self.inner.borrow_mut().left.take() {
            previous.clear_parent();
        }
        if let Some(node) = node {
            node.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
            self.inner.borrow_mut().left = Some(node);
        }
    }

    /// Installs `node` as the right child; the mirror of
    /// [`set_left`](Self::set_left).
    pub fn set_right(&self, node: Option<Self>) {
        if let Some(previous) = self.inner.borrow_mut().right.take() {
            previous.clear_parent();
        }
        if let Some(node) = node {
            node.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
            self.inner.borrow_mut().right = Some(node);
        }
    }

    /// Detaches `child` if it is this node's left or right child.
    ///
    /// Identity, not value, decides the match. Returns `false` (and changes
    /// nothing) when `child` is not a child of this node.
    pub fn remove_child(&self, child: &Self) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            if inner.left.as_ref().is_some_and(|left| left == child) {
                inner.left.take()
            } else if inner.right.as_ref().is_some_and(|right| right == child) {
                inner.right.take()
            } else {
                None
            }
        };
        match removed {
            Some(removed) => {
                removed.clear_parent();
                true
            }
            None => false,
        }
    }

    /// Swaps the child slot holding `to_replace` over to `replacement`.
    ///
    /// Used when splicing a removed node's surviving child into its place.
    /// The replaced node's back-reference is cleared and the replacement is
    /// stamped with this node as its parent. Returns `false` when
    /// `to_replace` is not a child of this node.
    pub fn replace_child(&self, to_replace: &Self, replacement: &Self) -> bool {
        let slot = {
            let inner = self.inner.borrow();
            if inner.left.as_ref().is_some_and(|left| left == to_replace) {
                Some(ChildSlot::Left)
            } else if inner.right.as_ref().is_some_and(|right| right == to_replace) {
                Some(ChildSlot::Right)
            } else {
                None
            }
        };
        match slot {
            Some(ChildSlot::Left) => {
                self.set_left(Some(replacement.clone()));
                true
            }
            Some(ChildSlot::Right) => {
                self.set_right(Some(replacement.clone()));
                true
            }
            None => false,
        }
    }

    /// Clears the parent back-reference, leaving the node detached upward.
    pub(crate) fn clear_parent(&self) {
        self.inner.borrow_mut().parent = Weak::new();
    }
}

/// Which child slot of a parent a node occupies.
enum ChildSlot {
    Left,
    Right,
}

impl<T: Clone, M> TreeNode<T, M> {
    /// Overwrites `target`'s value and children with `source`'s.
    ///
    /// The children move over to `target` (their back-references are
    /// re-stamped); `source` is expected to be discarded afterwards. Trees
    /// use this when the node being removed is the unparented root, whose
    /// object identity must survive the removal.
    pub fn copy_node(source: &Self, target: &Self) {
        if let Some(value) = source.value() {
            target.set_value(value);
        } else {
            target.take_value();
        }
        target.set_left(source.left());
        target.set_right(source.right());
    }
}

// =============================================================================
// Derived Quantities
// =============================================================================

impl<T, M> TreeNode<T, M> {
    /// Height of the left subtree: `0` without a left child, otherwise the
    /// child's height plus one.
    #[must_use]
    pub fn left_height(&self) -> usize {
        self.inner
            .borrow()
            .left
            .as_ref()
            .map_or(0, |left| left.height() + 1)
    }

    /// Height of the right subtree; the mirror of
    /// [`left_height`](Self::left_height).
    #[must_use]
    pub fn right_height(&self) -> usize {
        self.inner
            .borrow()
            .right
            .as_ref()
            .map_or(0, |right| right.height() + 1)
    }

    /// Height of the subtree rooted at this node.
    #[must_use]
    pub fn height(&self) -> usize {
        self.left_height().max(self.right_height())
    }

    /// Left subtree height minus right subtree height.
    ///
    /// Recomputed from the live children on every call, so it always agrees
    /// with the current structure.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn balance_factor(&self) -> isize {
        self.left_height() as isize - self.right_height() as isize
    }

    /// Returns the uncle: the sibling of this node's parent.
    ///
    /// `None` when the node has no parent or grandparent, or when the
    /// grandparent does not have both children.
    #[must_use]
    pub fn uncle(&self) -> Option<Self> {
        let parent = self.parent()?;
        let grandparent = parent.parent()?;
        let (left, right) = {
            let inner = grandparent.inner.borrow();
            (inner.left.clone()?, inner.right.clone()?)
        };
        if parent == left { Some(right) } else { Some(left) }
    }
}

// =============================================================================
// Traversal & Rendering
// =============================================================================

impl<T: Clone, M> TreeNode<T, M> {
    /// Collects the subtree's values in ascending (in-order) sequence.
    ///
    /// The sentinel contributes nothing, so an empty tree's root yields an
    /// empty vector.
    #[must_use]
    pub fn traverse_in_order(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.collect_in_order(&mut values);
        values
    }

    fn collect_in_order(&self, values: &mut Vec<T>) {
        let inner = self.inner.borrow();
        if let Some(left) = &inner.left {
            left.collect_in_order(values);
        }
        if let Some(value) = &inner.value {
            values.push(value.clone());
        }
        if let Some(right) = &inner.right {
            right.collect_in_order(values);
        }
    }
}

impl<T: fmt::Display, M> TreeNode<T, M> {
    fn render_in_order(&self, rendered: &mut Vec<String>) {
        let inner = self.inner.borrow();
        if let Some(left) = &inner.left {
            left.render_in_order(rendered);
        }
        if let Some(value) = &inner.value {
            rendered.push(value.to_string());
        }
        if let Some(right) = &inner.right {
            right.render_in_order(rendered);
        }
    }
}

impl<T: fmt::Display, M> fmt::Display for TreeNode<T, M> {
    /// Renders the in-order value sequence, comma-joined.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = Vec::new();
        self.render_in_order(&mut rendered);
        formatter.write_str(&rendered.join(","))
    }
}

// =============================================================================
// Handle Semantics
// =============================================================================

impl<T, M> Clone for TreeNode<T, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, M> PartialEq for TreeNode<T, M> {
    /// Handle equality is node identity, not value equality.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, M> Eq for TreeNode<T, M> {}

impl<T: fmt::Debug, M> fmt::Debug for TreeNode<T, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TreeNode")
            .field("value", &self.inner.borrow().value)
            .finish_non_exhaustive()
    }
}
