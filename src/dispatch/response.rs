//! Tool response rendering.

use serde::Serialize;

/// The uniform response every handler produces: human-readable text plus
/// optional structured metadata.
///
/// The text is the user-facing rendering of the engine result; metadata
/// carries machine-readable pieces of it (minted instance ids, polled
/// values, found indices) for callers that want structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResponse {
    /// Human-readable response text.
    pub text: String,
    /// Optional structured metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ToolResponse {
    /// Creates a text-only response.
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            metadata: None,
        }
    }

    /// Creates a response with text and structured metadata.
    #[must_use]
    pub fn with_metadata(message: impl Into<String>, metadata: serde_json::Value) -> Self {
        Self {
            text: message.into(),
            metadata: Some(metadata),
        }
    }
}
