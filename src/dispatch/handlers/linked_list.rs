//! Handler for the singly linked list tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::list::LinkedList;

use super::{instance_mut, required_value};

pub(crate) const TOOL: &str = "linked-list";

pub(crate) struct LinkedListHandler {
    registry: InstanceRegistry<LinkedList<String>>,
}

impl LinkedListHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("linked_list"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(LinkedList::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new linked list. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "append" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                list.append(value.clone());
                Ok(ToolResponse::text(format!(
                    "Appended '{value}' to the linked list."
                )))
            }
            "prepend" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                list.prepend(value.clone());
                Ok(ToolResponse::text(format!(
                    "Prepended '{value}' to the linked list."
                )))
            }
            "delete" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(match list.delete(&value) {
                    Some(deleted) => format!("Deleted '{deleted}' from the linked list."),
                    None => format!("The linked list does not contain '{value}'."),
                }))
            }
            "find" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(match list.find(&value) {
                    Some(found) => format!("Found '{found}' in the linked list."),
                    None => format!("The linked list does not contain '{value}'."),
                }))
            }
            "toArray" => {
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                let values = list.to_vec();
                Ok(ToolResponse::with_metadata(
                    values.join(","),
                    json!({ "values": values }),
                ))
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
