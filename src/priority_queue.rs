//! Priority queue over the binary heap.
//!
//! [`PriorityQueue`] is a min-[`Heap`] whose comparator consults a side
//! table of per-item priorities instead of the item values: the item with
//! the numerically smallest priority polls first. Items are keyed by their
//! `Display` rendering in the priority table, so two items rendering
//! identically share a priority.
//!
//! # Examples
//!
//! ```rust
//! use arbors::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.add("low", 10);
//! queue.add("high", 1);
//!
//! assert_eq!(queue.peek(), Some(&"high"));
//!
//! queue.change_priority(&"low", 0);
//! assert_eq!(queue.peek(), Some(&"low"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::compare::Comparator;
use crate::heap::Heap;

type PriorityTable = Rc<RefCell<HashMap<String, i64>>>;

/// A priority queue: a min-heap ordered by per-item priorities.
pub struct PriorityQueue<T> {
    heap: Heap<T>,
    priorities: PriorityTable,
    value_comparator: Comparator<T>,
}

impl<T: fmt::Display + Ord + 'static> PriorityQueue<T> {
    /// Creates an empty priority queue.
    #[must_use]
    pub fn new() -> Self {
        let priorities: PriorityTable = Rc::new(RefCell::new(HashMap::new()));

        // The heap orders by priority, looked up through the shared table;
        // the value comparator is kept for finding items by value.
        let priority_comparator = {
            let priorities = Rc::clone(&priorities);
            Comparator::new(move |a: &T, b: &T| {
                let table = priorities.borrow();
                let priority_a = table.get(&a.to_string()).copied().unwrap_or(0);
                let priority_b = table.get(&b.to_string()).copied().unwrap_or(0);
                priority_a.cmp(&priority_b)
            })
        };

        Self {
            heap: Heap::with_comparator(priority_comparator),
            priorities,
            value_comparator: Comparator::natural(),
        }
    }
}

impl<T: fmt::Display + Ord + 'static> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> PriorityQueue<T> {
    /// Returns `true` if the queue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds `item` with the given priority (smaller polls first).
    pub fn add(&mut self, item: T, priority: i64) {
        self.priorities.borrow_mut().insert(item.to_string(), priority);
        self.heap.add(item);
    }

    /// Removes every occurrence of `item`, matched by value, and forgets
    /// its priority.
    pub fn remove(&mut self, item: &T) {
        self.heap.remove_with(item, &self.value_comparator);
        self.priorities.borrow_mut().remove(&item.to_string());
    }

    /// Re-queues `item` under a new priority.
    pub fn change_priority(&mut self, item: &T, priority: i64)
    where
        T: Clone,
    {
        self.remove(item);
        self.add(item.clone(), priority);
    }

    /// Returns the heap indices of every occurrence of `item`, matched by
    /// value.
    #[must_use]
    pub fn find_by_value(&self, item: &T) -> Vec<usize> {
        self.heap.find_with(item, &self.value_comparator)
    }

    /// Returns `true` if `item` is queued, matched by value.
    #[must_use]
    pub fn has_value(&self, item: &T) -> bool {
        !self.find_by_value(item).is_empty()
    }

    /// Returns the highest-priority item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the highest-priority item.
    pub fn poll(&mut self) -> Option<T> {
        self.heap.poll()
    }
}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    /// Renders the backing heap array, comma-joined.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, formatter)
    }
}
