//! Handler for the trie tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::trie::Trie;

use super::{instance_mut, required_word};

pub(crate) const TOOL: &str = "trie";

pub(crate) struct TrieHandler {
    registry: InstanceRegistry<Trie>,
}

impl TrieHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("trie"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(Trie::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new trie. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "addWord" => {
                let word = required_word(request)?.to_string();
                let trie = instance_mut(&mut self.registry, request, TOOL)?;
                trie.add_word(&word);
                Ok(ToolResponse::text(format!(
                    "Added the word '{word}' to the trie."
                )))
            }
            "suggestNextCharacters" => {
                let word = required_word(request)?.to_string();
                let trie = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match trie.suggest_next_characters(&word) {
                    Some(characters) => {
                        let rendered: Vec<String> = characters
                            .iter()
                            .map(|character| character.to_string())
                            .collect();
                        ToolResponse::with_metadata(
                            format!("Next characters after '{word}': {}.", rendered.join(",")),
                            json!({ "characters": rendered }),
                        )
                    }
                    None => {
                        ToolResponse::text(format!("The trie does not contain the prefix '{word}'."))
                    }
                })
            }
            "doesWordExist" => {
                let word = required_word(request)?.to_string();
                let trie = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if trie.does_word_exist(&word) {
                    format!("The trie contains '{word}'.")
                } else {
                    format!("The trie does not contain '{word}'.")
                }))
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
