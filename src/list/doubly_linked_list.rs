//! Mutable doubly linked list.
//!
//! [`DoublyLinkedList`] links nodes forward with owning `Rc` handles and
//! backward with non-owning [`Weak`] references, the same
//! owned-forward/weak-backward split the tree engine uses for its parent
//! links, so dropping the list tears the chain down without reference
//! cycles.
//!
//! # Examples
//!
//! ```rust
//! use arbors::list::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! assert_eq!(list.to_vec_reverse(), vec![3, 2, 1]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::compare::Comparator;

// =============================================================================
// List Definition
// =============================================================================

type NodeHandle<T> = Rc<RefCell<DoublyListNode<T>>>;

struct DoublyListNode<T> {
    value: T,
    next: Option<NodeHandle<T>>,
    previous: Weak<RefCell<DoublyListNode<T>>>,
}

/// A doubly linked list ordered by insertion, traversable both ways.
pub struct DoublyLinkedList<T> {
    head: Option<NodeHandle<T>>,
    tail: Option<NodeHandle<T>>,
    comparator: Comparator<T>,
}

impl<T: Ord + 'static> DoublyLinkedList<T> {
    /// Creates an empty list comparing values by their natural ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord + 'static> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list using the given comparator for value matching.
    #[must_use]
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            head: None,
            tail: None,
            comparator,
        }
    }

    /// Returns `true` if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` at the front of the list.
    pub fn prepend(&mut self, value: T) {
        let node = Rc::new(RefCell::new(DoublyListNode {
            value,
            next: self.head.clone(),
            previous: Weak::new(),
        }));
        if let Some(head) = &self.head {
            head.borrow_mut().previous = Rc::downgrade(&node);
        }
        self.head = Some(node.clone());
        if self.tail.is_none() {
            self.tail = Some(node);
        }
    }

    /// Adds `value` at the end of the list.
    pub fn append(&mut self, value: T) {
        let node = Rc::new(RefCell::new(DoublyListNode {
            value,
            next: None,
            previous: self.tail.as_ref().map_or_else(Weak::new, Rc::downgrade),
        }));
        match self.tail.take() {
            Some(tail) => tail.borrow_mut().next = Some(node.clone()),
            None => self.head = Some(node.clone()),
        }
        self.tail = Some(node);
    }

    /// Removes and returns the first value.
    pub fn delete_head(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let head = self.head.take()?;
        match head.borrow().next.clone() {
            Some(next) => {
                next.borrow_mut().previous = Weak::new();
                self.head = Some(next);
            }
            None => self.tail = None,
        }
        let value = head.borrow().value.clone();
        Some(value)
    }

    /// Removes and returns the last value.
    pub fn delete_tail(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let tail = self.tail.take()?;
        match tail.borrow().previous.upgrade() {
            Some(previous) => {
                previous.borrow_mut().next = None;
                self.tail = Some(previous);
            }
            None => self.head = None,
        }
        let value = tail.borrow().value.clone();
        Some(value)
    }

    /// Removes every node whose value matches `value` under the comparator.
    ///
    /// Returns the last removed value, or `None` if nothing matched.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Clone,
    {
        let mut deleted = None;
        let mut current = self.head.clone();
        while let Some(node) = current {
            let next = node.borrow().next.clone();
            if self.comparator.equal(&node.borrow().value, value) {
                self.unlink(&node);
                deleted = Some(node.borrow().value.clone());
            }
            current = next;
        }
        deleted
    }

    /// Detaches `node` from the chain, fixing head/tail and the neighbors'
    /// links.
    fn unlink(&mut self, node: &NodeHandle<T>) {
        let previous = node.borrow().previous.upgrade();
        let next = node.borrow().next.clone();

        match &previous {
            Some(previous) => previous.borrow_mut().next = next.clone(),
            None => self.head = next.clone(),
        }
        match &next {
            Some(next) => {
                next.borrow_mut().previous =
                    previous.as_ref().map_or_else(Weak::new, Rc::downgrade);
            }
            None => self.tail = previous,
        }

        let mut inner = node.borrow_mut();
        inner.next = None;
        inner.previous = Weak::new();
    }

    /// Returns `true` if some value matches `value` under the comparator.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.head.clone();
        while let Some(node) = current {
            if self.comparator.equal(&node.borrow().value, value) {
                return true;
            }
            current = node.borrow().next.clone();
        }
        false
    }

    /// Reverses the list in place by swapping every node's links.
    pub fn reverse(&mut self) {
        let mut current = self.head.clone();
        while let Some(node) = current {
            let next = node.borrow().next.clone();
            let previous = node.borrow().previous.upgrade();
            {
                let mut inner = node.borrow_mut();
                inner.next = previous;
                inner.previous = next.as_ref().map_or_else(Weak::new, Rc::downgrade);
            }
            current = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Collects the list's values front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::new();
        let mut current = self.head.clone();
        while let Some(node) = current {
            values.push(node.borrow().value.clone());
            current = node.borrow().next.clone();
        }
        values
    }

    /// Collects the list's values back to front.
    #[must_use]
    pub fn to_vec_reverse(&self) -> Vec<T> {
        let mut values = Vec::new();
        let mut current = self.tail.clone();
        while let Some(node) = current {
            values.push(node.borrow().value.clone());
            current = node.borrow().previous.upgrade();
        }
        values
    }
}

impl<T: Ord + 'static> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    /// Renders the values front to back, comma-joined.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.head.clone();
        let mut first = true;
        while let Some(node) = current {
            if !first {
                formatter.write_str(",")?;
            }
            write!(formatter, "{}", node.borrow().value)?;
            first = false;
            current = node.borrow().next.clone();
        }
        Ok(())
    }
}
