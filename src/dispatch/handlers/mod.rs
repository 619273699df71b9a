//! Per-structure tool handlers.
//!
//! Each handler owns an [`InstanceRegistry`] for its structure, validates
//! the request's arguments for the named operation, invokes the structure,
//! and renders the result as a [`ToolResponse`](super::ToolResponse). The
//! shared helpers here implement the argument rules every handler applies
//! before touching its structure.

use super::error::DispatchError;
use super::registry::InstanceRegistry;
use super::request::ToolRequest;

mod avl_tree;
mod binary_search_tree;
mod doubly_linked_list;
mod hash_table;
mod heap;
mod linked_list;
mod power_of_two;
mod priority_queue;
mod queue;
mod red_black_tree;
mod stack;
mod trie;

pub(crate) use avl_tree::AvlTreeHandler;
pub(crate) use avl_tree::TOOL as AVL_TREE_TOOL;
pub(crate) use binary_search_tree::BinarySearchTreeHandler;
pub(crate) use binary_search_tree::TOOL as BINARY_SEARCH_TREE_TOOL;
pub(crate) use doubly_linked_list::DoublyLinkedListHandler;
pub(crate) use doubly_linked_list::TOOL as DOUBLY_LINKED_LIST_TOOL;
pub(crate) use hash_table::HashTableHandler;
pub(crate) use hash_table::TOOL as HASH_TABLE_TOOL;
pub(crate) use heap::HeapHandler;
pub(crate) use heap::TOOL as HEAP_TOOL;
pub(crate) use linked_list::LinkedListHandler;
pub(crate) use linked_list::TOOL as LINKED_LIST_TOOL;
pub(crate) use power_of_two::TOOL as IS_POWER_OF_TWO_TOOL;
pub(crate) use power_of_two::handle_is_power_of_two;
pub(crate) use priority_queue::PriorityQueueHandler;
pub(crate) use priority_queue::TOOL as PRIORITY_QUEUE_TOOL;
pub(crate) use queue::QueueHandler;
pub(crate) use queue::TOOL as QUEUE_TOOL;
pub(crate) use red_black_tree::RedBlackTreeHandler;
pub(crate) use red_black_tree::TOOL as RED_BLACK_TREE_TOOL;
pub(crate) use stack::StackHandler;
pub(crate) use stack::TOOL as STACK_TOOL;
pub(crate) use trie::TOOL as TRIE_TOOL;
pub(crate) use trie::TrieHandler;

/// Returns the request's `value` argument or the missing-argument error.
fn required_value(request: &ToolRequest) -> Result<&str, DispatchError> {
    request
        .value
        .as_deref()
        .ok_or_else(|| DispatchError::MissingValue {
            operation: request.operation.clone(),
        })
}

/// Returns the request's `value` argument parsed as a number.
fn required_number(request: &ToolRequest) -> Result<i64, DispatchError> {
    let value = required_value(request)?;
    value
        .parse()
        .map_err(|_| DispatchError::InvalidNumber {
            value: value.to_string(),
        })
}

/// Returns the request's `key` argument or the missing-argument error.
fn required_key(request: &ToolRequest) -> Result<&str, DispatchError> {
    request.key.as_deref().ok_or_else(|| DispatchError::MissingKey {
        operation: request.operation.clone(),
    })
}

/// Returns the request's `word` argument or the missing-argument error.
fn required_word(request: &ToolRequest) -> Result<&str, DispatchError> {
    request
        .word
        .as_deref()
        .ok_or_else(|| DispatchError::MissingWord {
            operation: request.operation.clone(),
        })
}

/// Returns the request's `priority` argument or the missing-argument error.
fn required_priority(request: &ToolRequest) -> Result<i64, DispatchError> {
    request.priority.ok_or_else(|| DispatchError::MissingPriority {
        operation: request.operation.clone(),
    })
}

/// Resolves the request's instance id against `registry`.
fn instance_mut<'registry, T>(
    registry: &'registry mut InstanceRegistry<T>,
    request: &ToolRequest,
    tool: &'static str,
) -> Result<&'registry mut T, DispatchError> {
    let instance_id = request
        .instance_id
        .as_deref()
        .ok_or(DispatchError::UnknownInstance { tool })?;
    registry
        .get_mut(instance_id)
        .ok_or(DispatchError::UnknownInstance { tool })
}
