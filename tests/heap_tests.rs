#![cfg(feature = "heap")]
//! Unit tests for the binary heap.

use arbors::compare::Comparator;
use arbors::heap::Heap;
use rstest::rstest;

// =============================================================================
// Ordering Tests
// =============================================================================

#[rstest]
fn test_new_heap_is_empty() {
    let heap: Heap<i32> = Heap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.to_string(), "");
}

#[rstest]
fn test_add_keeps_the_minimum_on_top() {
    let mut heap = Heap::new();
    heap.add(5);
    assert_eq!(heap.peek(), Some(&5));

    heap.add(3);
    assert_eq!(heap.peek(), Some(&3));

    heap.add(10);
    assert_eq!(heap.peek(), Some(&3));

    heap.add(1);
    assert_eq!(heap.peek(), Some(&1));
}

#[rstest]
fn test_internal_layout_after_adds() {
    let mut heap = Heap::new();
    heap.add(3);
    heap.add(12);
    heap.add(10);
    assert_eq!(heap.to_string(), "3,12,10");

    heap.add(11);
    assert_eq!(heap.to_string(), "3,11,10,12");

    heap.add(11);
    assert_eq!(heap.to_string(), "3,11,10,12,11");
}

#[rstest]
fn test_poll_returns_ascending_values() {
    let mut heap = Heap::new();
    for value in [5, 3, 10, 11, 5] {
        heap.add(value);
    }

    let mut polled = Vec::new();
    while let Some(value) = heap.poll() {
        polled.push(value);
    }
    assert_eq!(polled, vec![3, 5, 5, 10, 11]);
    assert!(heap.is_empty());
}

#[rstest]
fn test_poll_re_heapifies() {
    let mut heap = Heap::new();
    for value in [3, 12, 10, 11, 11] {
        heap.add(value);
    }

    assert_eq!(heap.poll(), Some(3));
    assert_eq!(heap.to_string(), "10,11,11,12");
}

// =============================================================================
// Find & Remove Tests
// =============================================================================

#[rstest]
fn test_find_returns_every_matching_index() {
    let mut heap = Heap::new();
    for value in [3, 12, 10, 11, 11] {
        heap.add(value);
    }

    assert_eq!(heap.find(&3), vec![0]);
    assert_eq!(heap.find(&11), vec![1, 4]);
    assert!(heap.find(&44).is_empty());
}

#[rstest]
fn test_remove_from_the_top_re_heapifies() {
    let mut heap = Heap::new();
    for value in [3, 12, 10, 11, 11] {
        heap.add(value);
    }

    heap.remove(&3);
    assert_eq!(heap.to_string(), "10,11,11,12");

    heap.remove(&11);
    assert_eq!(heap.to_string(), "10,12");
}

#[rstest]
fn test_remove_absent_value_is_a_no_op() {
    let mut heap = Heap::new();
    heap.add(1);
    heap.add(2);

    heap.remove(&9);
    assert_eq!(heap.to_string(), "1,2");
}

#[rstest]
fn test_remove_with_a_custom_finding_comparator() {
    let mut heap: Heap<i32> = Heap::new();
    for value in [3, 12, 10, 11] {
        heap.add(value);
    }

    // Match anything greater than 9, removing everything but the 3.
    let more_than_nine = Comparator::new(|probe: &i32, item: &i32| {
        if *item > 9 { std::cmp::Ordering::Equal } else { probe.cmp(item) }
    });
    heap.remove_with(&0, &more_than_nine);

    assert_eq!(heap.to_vec(), vec![3]);
}

// =============================================================================
// Max-Heap Tests
// =============================================================================

#[rstest]
fn test_reversed_comparator_makes_a_max_heap() {
    let mut descending = Comparator::natural();
    descending.reverse();
    let mut heap = Heap::with_comparator(descending);

    for value in [5, 3, 10, 11, 5] {
        heap.add(value);
    }

    let mut polled = Vec::new();
    while let Some(value) = heap.poll() {
        polled.push(value);
    }
    assert_eq!(polled, vec![11, 10, 5, 5, 3]);
}
