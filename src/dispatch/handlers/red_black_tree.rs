//! Handler for the color-balanced tree tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::tree::RedBlackTree;

use super::{instance_mut, required_value};

pub(crate) const TOOL: &str = "red-black-tree";

pub(crate) struct RedBlackTreeHandler {
    registry: InstanceRegistry<RedBlackTree<String>>,
}

impl RedBlackTreeHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("red_black_tree"),
        }
    }

    #[allow(clippy::too_many_lines)]
    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(RedBlackTree::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new red-black tree. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "insert" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                tree.insert(value.clone());
                Ok(ToolResponse::text(format!(
                    "Inserted '{value}' into the red-black tree."
                )))
            }
            "contains" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if tree.contains(&value) {
                    format!("The red-black tree contains '{value}'.")
                } else {
                    format!("The red-black tree does not contain '{value}'.")
                }))
            }
            "remove" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                tree.remove(&value)?;
                Ok(ToolResponse::text(format!(
                    "Removed '{value}' from the red-black tree."
                )))
            }
            "toString" => {
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(tree.to_string()))
            }
            "getBalance" => {
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                let balance_factor = tree.root().balance_factor();
                Ok(ToolResponse::with_metadata(
                    format!("Balance factor of the root: {balance_factor}"),
                    json!({ "balanceFactor": balance_factor }),
                ))
            }
            "isNodeRed" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                match tree.find(&value) {
                    Some(node) => Ok(ToolResponse::text(if tree.is_node_red(&node) {
                        format!("The node '{value}' is red.")
                    } else {
                        format!("The node '{value}' is not red.")
                    })),
                    None => Ok(ToolResponse::text(format!(
                        "The red-black tree does not contain '{value}'."
                    ))),
                }
            }
            "isNodeBlack" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                match tree.find(&value) {
                    Some(node) => Ok(ToolResponse::text(if tree.is_node_black(&node) {
                        format!("The node '{value}' is black.")
                    } else {
                        format!("The node '{value}' is not black.")
                    })),
                    None => Ok(ToolResponse::text(format!(
                        "The red-black tree does not contain '{value}'."
                    ))),
                }
            }
            "isNodeColored" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                match tree.find(&value) {
                    Some(node) => Ok(ToolResponse::text(if tree.is_node_colored(&node) {
                        format!("The node '{value}' is colored.")
                    } else {
                        format!("The node '{value}' is not colored.")
                    })),
                    None => Ok(ToolResponse::text(format!(
                        "The red-black tree does not contain '{value}'."
                    ))),
                }
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
