//! Tool request arguments.

use serde::Deserialize;

/// Arguments for one tool invocation.
///
/// Every operation names itself through `operation`; the remaining fields
/// are optional and validated per operation by the handlers (a missing
/// required argument is a [`DispatchError`](super::DispatchError), reported
/// before the engine is touched).
///
/// Requests deserialize from the JSON shape callers send:
///
/// ```rust
/// use arbors::dispatch::ToolRequest;
///
/// let request: ToolRequest =
///     serde_json::from_str(r#"{"operation":"insert","value":"7","instanceId":"avl_tree_1"}"#)
///         .unwrap();
/// assert_eq!(request.operation, "insert");
/// assert_eq!(request.value.as_deref(), Some("7"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRequest {
    /// Operation to perform. Every tool starts with `create`, which mints
    /// the instance id the other operations address.
    pub operation: String,
    /// Value argument (inserts, lookups, removals).
    #[serde(default)]
    pub value: Option<String>,
    /// First value of a two-value comparison.
    #[serde(default)]
    pub value1: Option<String>,
    /// Second value of a two-value comparison.
    #[serde(default)]
    pub value2: Option<String>,
    /// Key argument (hash table operations).
    #[serde(default)]
    pub key: Option<String>,
    /// Word argument (trie operations).
    #[serde(default)]
    pub word: Option<String>,
    /// Priority argument (priority queue operations).
    #[serde(default)]
    pub priority: Option<i64>,
    /// Identifier of the instance to operate on; returned by `create`.
    #[serde(default)]
    pub instance_id: Option<String>,
}

impl ToolRequest {
    /// Creates a request for `operation` with no arguments.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            ..Self::default()
        }
    }

    /// Sets the `value` argument.
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Sets the `key` argument.
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Sets the `word` argument.
    #[must_use]
    pub fn with_word(mut self, word: &str) -> Self {
        self.word = Some(word.to_string());
        self
    }

    /// Sets the `priority` argument.
    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the instance identifier.
    #[must_use]
    pub fn with_instance(mut self, instance_id: &str) -> Self {
        self.instance_id = Some(instance_id.to_string());
        self
    }
}
