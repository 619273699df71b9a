#![cfg(feature = "list")]
//! Unit tests for the doubly linked list.

use arbors::list::DoublyLinkedList;
use rstest::rstest;

// =============================================================================
// Construction & Insertion Tests
// =============================================================================

#[rstest]
fn test_new_list_is_empty() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.is_empty());
    assert!(list.to_vec().is_empty());
    assert!(list.to_vec_reverse().is_empty());
}

#[rstest]
fn test_append_and_prepend() {
    let mut list = DoublyLinkedList::new();
    list.append(2);
    list.append(3);
    list.prepend(1);

    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.to_vec_reverse(), vec![3, 2, 1]);
    assert_eq!(list.to_string(), "1,2,3");
}

#[rstest]
fn test_from_iterator() {
    let list: DoublyLinkedList<i32> = (1..=3).collect();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[rstest]
fn test_delete_removes_every_occurrence() {
    let mut list: DoublyLinkedList<i32> = [1, 2, 2, 3, 2].into_iter().collect();

    assert_eq!(list.delete(&2), Some(2));
    assert_eq!(list.to_vec(), vec![1, 3]);
    assert_eq!(list.to_vec_reverse(), vec![3, 1]);
}

#[rstest]
fn test_delete_the_head_value_moves_the_head() {
    let mut list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.delete(&1), Some(1));
    assert_eq!(list.to_vec(), vec![2, 3]);
    // Backward traversal still starts at the tail.
    assert_eq!(list.to_vec_reverse(), vec![3, 2]);
}

#[rstest]
fn test_delete_the_tail_value_moves_the_tail() {
    let mut list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.delete(&3), Some(3));
    assert_eq!(list.to_vec(), vec![1, 2]);
    assert_eq!(list.to_vec_reverse(), vec![2, 1]);
}

#[rstest]
fn test_delete_everything() {
    let mut list: DoublyLinkedList<i32> = [5, 5].into_iter().collect();
    assert_eq!(list.delete(&5), Some(5));
    assert!(list.is_empty());
    assert!(list.to_vec_reverse().is_empty());
}

#[rstest]
fn test_delete_head_and_tail_operations() {
    let mut list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.delete_head(), Some(1));
    assert_eq!(list.delete_tail(), Some(3));
    assert_eq!(list.to_vec(), vec![2]);

    assert_eq!(list.delete_head(), Some(2));
    assert_eq!(list.delete_head(), None);
    assert_eq!(list.delete_tail(), None);
    assert!(list.is_empty());
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[rstest]
fn test_contains() {
    let list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    assert!(list.contains(&2));
    assert!(!list.contains(&9));
}

// =============================================================================
// Reverse Tests
// =============================================================================

#[rstest]
fn test_reverse() {
    let mut list: DoublyLinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
    list.reverse();

    assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    assert_eq!(list.to_vec_reverse(), vec![1, 2, 3, 4]);

    list.reverse();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
}
