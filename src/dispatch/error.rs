//! Error types for the dispatch layer.

use std::fmt;

use crate::tree::TreeError;

/// Errors produced while validating and routing tool requests.
///
/// Engine errors pass through as [`DispatchError::Tree`]; everything else is
/// an argument or routing problem detected before the engine is invoked.
///
/// # Examples
///
/// ```rust
/// use arbors::dispatch::{DispatchError, Dispatcher, ToolRequest};
///
/// let mut dispatcher = Dispatcher::new();
/// let response = dispatcher.dispatch("no-such-tool", &ToolRequest::new("create"));
/// assert!(matches!(response, Err(DispatchError::UnknownTool(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The tool name matched no registered handler.
    UnknownTool(String),
    /// The operation is not part of the tool's surface.
    UnknownOperation {
        /// Tool that rejected the operation.
        tool: &'static str,
        /// The rejected operation name.
        operation: String,
    },
    /// The operation needs a `value` argument and none was supplied.
    MissingValue {
        /// Operation that required the argument.
        operation: String,
    },
    /// The operation needs a `key` argument and none was supplied.
    MissingKey {
        /// Operation that required the argument.
        operation: String,
    },
    /// The operation needs a `word` argument and none was supplied.
    MissingWord {
        /// Operation that required the argument.
        operation: String,
    },
    /// The operation needs a `priority` argument and none was supplied.
    MissingPriority {
        /// Operation that required the argument.
        operation: String,
    },
    /// The request named no instance id, or an id no instance is registered
    /// under.
    UnknownInstance {
        /// Tool whose registry was consulted.
        tool: &'static str,
    },
    /// A numeric argument failed to parse.
    InvalidNumber {
        /// The offending argument text.
        value: String,
    },
    /// An engine error, surfaced verbatim.
    Tree(TreeError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(tool) => write!(formatter, "unknown tool: {tool}"),
            Self::UnknownOperation { tool, operation } => {
                write!(formatter, "unsupported operation for {tool}: {operation}")
            }
            Self::MissingValue { operation } => {
                write!(
                    formatter,
                    "the {operation} operation requires a 'value' parameter"
                )
            }
            Self::MissingKey { operation } => {
                write!(
                    formatter,
                    "the {operation} operation requires a 'key' parameter"
                )
            }
            Self::MissingWord { operation } => {
                write!(
                    formatter,
                    "the {operation} operation requires a 'word' parameter"
                )
            }
            Self::MissingPriority { operation } => {
                write!(
                    formatter,
                    "the {operation} operation requires a 'priority' parameter"
                )
            }
            Self::UnknownInstance { tool } => {
                write!(
                    formatter,
                    "a valid instance id is required; call the '{tool}' tool's 'create' operation first"
                )
            }
            Self::InvalidNumber { value } => {
                write!(formatter, "expected a number, got '{value}'")
            }
            Self::Tree(error) => error.fmt(formatter),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tree(error) => Some(error),
            _ => None,
        }
    }
}

impl From<TreeError> for DispatchError {
    fn from(error: TreeError) -> Self {
        Self::Tree(error)
    }
}
