//! Array-indexed binary heap.
//!
//! [`Heap`] keeps its elements in a `Vec`, computing parent/child positions
//! from indices (`parent(i) = (i - 1) / 2`, children at `2i + 1` and
//! `2i + 2`) and restoring the heap property with sift-up / sift-down
//! passes after each mutation. There is no structural rebalancing beyond
//! the sifts.
//!
//! The heap is a *min*-heap with respect to its comparator: the smallest
//! element under the comparator sits at the top. A max-heap is the same
//! heap with a reversed comparator.
//!
//! # Examples
//!
//! ```rust
//! use arbors::heap::Heap;
//!
//! let mut heap = Heap::new();
//! heap.add(5);
//! heap.add(1);
//! heap.add(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.poll(), Some(1));
//! assert_eq!(heap.poll(), Some(3));
//! ```

use std::fmt;

use crate::compare::Comparator;

fn parent_index(child_index: usize) -> Option<usize> {
    if child_index == 0 {
        None
    } else {
        Some((child_index - 1) / 2)
    }
}

const fn left_child_index(parent_index: usize) -> usize {
    2 * parent_index + 1
}

const fn right_child_index(parent_index: usize) -> usize {
    2 * parent_index + 2
}

/// A binary min-heap over a growable array.
pub struct Heap<T> {
    heap_container: Vec<T>,
    comparator: Comparator<T>,
}

impl<T: Ord + 'static> Heap<T> {
    /// Creates an empty heap ordered by the natural ordering of `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord + 'static> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Heap<T> {
    /// Creates an empty heap ordered by the given comparator.
    ///
    /// Reversing the comparator turns the heap into a max-heap:
    ///
    /// ```rust
    /// use arbors::compare::Comparator;
    /// use arbors::heap::Heap;
    ///
    /// let mut descending = Comparator::natural();
    /// descending.reverse();
    ///
    /// let mut max_heap = Heap::with_comparator(descending);
    /// max_heap.add(1);
    /// max_heap.add(5);
    /// max_heap.add(3);
    /// assert_eq!(max_heap.peek(), Some(&5));
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            heap_container: Vec::new(),
            comparator,
        }
    }

    /// Returns `true` if the heap holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap_container.is_empty()
    }

    /// Returns the number of values in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap_container.len()
    }

    /// Returns the top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap_container.first()
    }

    /// Removes and returns the top value.
    ///
    /// The last element moves into the vacated root slot and sifts down.
    pub fn poll(&mut self) -> Option<T> {
        if self.heap_container.is_empty() {
            return None;
        }
        let item = self.heap_container.swap_remove(0);
        Self::heapify_down(&mut self.heap_container, &self.comparator, 0);
        Some(item)
    }

    /// Adds `value` to the heap.
    pub fn add(&mut self, value: T) {
        self.heap_container.push(value);
        let last_index = self.heap_container.len() - 1;
        Self::heapify_up(&mut self.heap_container, &self.comparator, last_index);
    }

    /// Returns the indices of every element matching `value` under the
    /// heap's own comparator.
    #[must_use]
    pub fn find(&self, value: &T) -> Vec<usize> {
        self.find_with(value, &self.comparator)
    }

    /// Returns the indices of every element matching `value` under a custom
    /// comparator.
    #[must_use]
    pub fn find_with(&self, value: &T, comparator: &Comparator<T>) -> Vec<usize> {
        self.heap_container
            .iter()
            .enumerate()
            .filter(|(_, item)| comparator.equal(value, item))
            .map(|(index, _)| index)
            .collect()
    }

    /// Removes every element matching `value` under the heap's own
    /// comparator.
    pub fn remove(&mut self, value: &T) {
        self.remove_matches(value, None);
    }

    /// Removes every element matching `value` under a custom comparator
    /// (ordering inside the heap still uses the heap's own comparator).
    pub fn remove_with(&mut self, value: &T, finding_comparator: &Comparator<T>) {
        self.remove_matches(value, Some(finding_comparator));
    }

    /// Indices shift after each extraction, so the matches are re-located on
    /// every iteration; each vacated slot is refilled with the last element,
    /// which then sifts up or down as its neighbors dictate.
    fn remove_matches(&mut self, value: &T, finding: Option<&Comparator<T>>) {
        let removals = self
            .find_with(value, finding.unwrap_or(&self.comparator))
            .len();

        for _ in 0..removals {
            let Some(index_to_remove) = self
                .find_with(value, finding.unwrap_or(&self.comparator))
                .pop()
            else {
                break;
            };

            if index_to_remove == self.heap_container.len() - 1 {
                // Removing the last element needs no re-heapify.
                self.heap_container.pop();
                continue;
            }

            self.heap_container.swap_remove(index_to_remove);

            let parent_orders_first = parent_index(index_to_remove).is_none_or(|parent| {
                self.comparator.less_than(
                    &self.heap_container[parent],
                    &self.heap_container[index_to_remove],
                )
            });
            if left_child_index(index_to_remove) < self.heap_container.len() && parent_orders_first
            {
                Self::heapify_down(&mut self.heap_container, &self.comparator, index_to_remove);
            } else {
                Self::heapify_up(&mut self.heap_container, &self.comparator, index_to_remove);
            }
        }
    }

    /// Sifts the element at `start_index` up until its parent orders before
    /// it.
    fn heapify_up(container: &mut [T], comparator: &Comparator<T>, start_index: usize) {
        let mut current_index = start_index;
        while let Some(parent) = parent_index(current_index) {
            if !comparator.less_than(&container[current_index], &container[parent]) {
                break;
            }
            container.swap(current_index, parent);
            current_index = parent;
        }
    }

    /// Sifts the element at `start_index` down, swapping with the
    /// earlier-ordering child until both children order after it.
    fn heapify_down(container: &mut [T], comparator: &Comparator<T>, start_index: usize) {
        let mut current_index = start_index;

        while left_child_index(current_index) < container.len() {
            let left = left_child_index(current_index);
            let right = right_child_index(current_index);

            let next_index = if right < container.len()
                && comparator.less_than(&container[right], &container[left])
            {
                right
            } else {
                left
            };

            if comparator.less_than(&container[current_index], &container[next_index]) {
                break;
            }

            container.swap(current_index, next_index);
            current_index = next_index;
        }
    }
}

impl<T: Clone> Heap<T> {
    /// Copies out the backing array in heap order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.heap_container.clone()
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    /// Renders the backing array in heap order, comma-joined.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .heap_container
            .iter()
            .map(|value| value.to_string())
            .collect();
        formatter.write_str(&rendered.join(","))
    }
}
