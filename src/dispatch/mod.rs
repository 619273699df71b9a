//! Request/response tool dispatcher.
//!
//! The dispatcher is the external interface of the crate's structures: it
//! routes a tool name plus a [`ToolRequest`] to the matching handler, which
//! validates the arguments, looks the target instance up in its
//! [`InstanceRegistry`], invokes the structure, and renders the result as a
//! [`ToolResponse`] (human-readable text plus optional structured
//! metadata).
//!
//! Every tool follows the same lifecycle: a `create` operation mints an
//! opaque instance id (returned in both text and metadata), and every later
//! operation addresses that instance through `instance_id`. At most one
//! instance lives under an id. Engine errors (`ValueNotFound`, the balanced
//! trees' `RemoveUnsupported`) propagate as [`DispatchError`] values and are
//! rendered verbatim to the caller.
//!
//! Transport is out of scope: this layer is a synchronous, in-process
//! request/response API.
//!
//! # Examples
//!
//! ```rust
//! use arbors::dispatch::{Dispatcher, ToolRequest};
//!
//! let mut dispatcher = Dispatcher::new();
//!
//! let created = dispatcher
//!     .dispatch("avl-tree", &ToolRequest::new("create"))
//!     .unwrap();
//! let instance_id = created.metadata.unwrap()["instanceId"]
//!     .as_str()
//!     .unwrap()
//!     .to_string();
//!
//! for value in ["4", "3", "2"] {
//!     dispatcher
//!         .dispatch(
//!             "avl-tree",
//!             &ToolRequest::new("insert")
//!                 .with_value(value)
//!                 .with_instance(&instance_id),
//!         )
//!         .unwrap();
//! }
//!
//! let rendered = dispatcher
//!     .dispatch(
//!         "avl-tree",
//!         &ToolRequest::new("toString").with_instance(&instance_id),
//!     )
//!     .unwrap();
//! assert_eq!(rendered.text, "2,3,4");
//! ```

mod error;
mod handlers;
mod registry;
mod request;
mod response;

pub use error::DispatchError;
pub use registry::InstanceRegistry;
pub use request::ToolRequest;
pub use response::ToolResponse;

use handlers::{
    AvlTreeHandler, BinarySearchTreeHandler, DoublyLinkedListHandler, HashTableHandler,
    HeapHandler, LinkedListHandler, PriorityQueueHandler, QueueHandler, RedBlackTreeHandler,
    StackHandler, TrieHandler, handle_is_power_of_two,
};

/// Every tool name the dispatcher routes, in registration order.
pub const TOOL_NAMES: &[&str] = &[
    handlers::LINKED_LIST_TOOL,
    handlers::DOUBLY_LINKED_LIST_TOOL,
    handlers::QUEUE_TOOL,
    handlers::STACK_TOOL,
    handlers::HASH_TABLE_TOOL,
    handlers::HEAP_TOOL,
    handlers::PRIORITY_QUEUE_TOOL,
    handlers::TRIE_TOOL,
    handlers::BINARY_SEARCH_TREE_TOOL,
    handlers::AVL_TREE_TOOL,
    handlers::RED_BLACK_TREE_TOOL,
    handlers::IS_POWER_OF_TWO_TOOL,
];

/// Routes tool requests to per-structure handlers.
///
/// Each handler keeps its own instance registry, so instances of different
/// structures never share an id space and a dispatcher owns every structure
/// its callers create through it.
pub struct Dispatcher {
    linked_list: LinkedListHandler,
    doubly_linked_list: DoublyLinkedListHandler,
    queue: QueueHandler,
    stack: StackHandler,
    hash_table: HashTableHandler,
    heap: HeapHandler,
    priority_queue: PriorityQueueHandler,
    trie: TrieHandler,
    binary_search_tree: BinarySearchTreeHandler,
    avl_tree: AvlTreeHandler,
    red_black_tree: RedBlackTreeHandler,
}

impl Dispatcher {
    /// Creates a dispatcher with empty registries for every tool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            linked_list: LinkedListHandler::new(),
            doubly_linked_list: DoublyLinkedListHandler::new(),
            queue: QueueHandler::new(),
            stack: StackHandler::new(),
            hash_table: HashTableHandler::new(),
            heap: HeapHandler::new(),
            priority_queue: PriorityQueueHandler::new(),
            trie: TrieHandler::new(),
            binary_search_tree: BinarySearchTreeHandler::new(),
            avl_tree: AvlTreeHandler::new(),
            red_black_tree: RedBlackTreeHandler::new(),
        }
    }

    /// Routes `request` to the handler registered for `tool`.
    ///
    /// # Errors
    ///
    /// [`DispatchError`] for unknown tools, unknown operations, missing or
    /// malformed arguments, unknown instance ids, and engine errors.
    pub fn dispatch(
        &mut self,
        tool: &str,
        request: &ToolRequest,
    ) -> Result<ToolResponse, DispatchError> {
        tracing::debug!(tool, operation = %request.operation, "dispatching tool request");
        match tool {
            handlers::LINKED_LIST_TOOL => self.linked_list.handle(request),
            handlers::DOUBLY_LINKED_LIST_TOOL => self.doubly_linked_list.handle(request),
            handlers::QUEUE_TOOL => self.queue.handle(request),
            handlers::STACK_TOOL => self.stack.handle(request),
            handlers::HASH_TABLE_TOOL => self.hash_table.handle(request),
            handlers::HEAP_TOOL => self.heap.handle(request),
            handlers::PRIORITY_QUEUE_TOOL => self.priority_queue.handle(request),
            handlers::TRIE_TOOL => self.trie.handle(request),
            handlers::BINARY_SEARCH_TREE_TOOL => self.binary_search_tree.handle(request),
            handlers::AVL_TREE_TOOL => self.avl_tree.handle(request),
            handlers::RED_BLACK_TREE_TOOL => self.red_black_tree.handle(request),
            handlers::IS_POWER_OF_TWO_TOOL => handle_is_power_of_two(request),
            other => {
                tracing::debug!(tool = other, "unknown tool");
                Err(DispatchError::UnknownTool(other.to_string()))
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
