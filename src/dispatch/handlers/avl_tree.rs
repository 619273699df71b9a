//! Handler for the height-balanced tree tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::tree::AvlTree;

use super::{instance_mut, required_value};

pub(crate) const TOOL: &str = "avl-tree";

pub(crate) struct AvlTreeHandler {
    registry: InstanceRegistry<AvlTree<String>>,
}

impl AvlTreeHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("avl_tree"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(AvlTree::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new AVL tree. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "insert" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                tree.insert(value.clone());
                Ok(ToolResponse::text(format!(
                    "Inserted '{value}' into the AVL tree."
                )))
            }
            "contains" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if tree.contains(&value) {
                    format!("The AVL tree contains '{value}'.")
                } else {
                    format!("The AVL tree does not contain '{value}'.")
                }))
            }
            "remove" => {
                let value = required_value(request)?.to_string();
                let tree = instance_mut(&mut self.registry, request, TOOL)?;
                tree.remove(&value)?;
                Ok(ToolResponse::text(format!(
                    "Removed '{value}' from the AVL tree."
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
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
