//! Handler for the doubly linked list tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::list::DoublyLinkedList;

use super::{instance_mut, required_value};

pub(crate) const TOOL: &str = "doubly-linked-list";

pub(crate) struct DoublyLinkedListHandler {
    registry: InstanceRegistry<DoublyLinkedList<String>>,
}

impl DoublyLinkedListHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("doubly_linked_list"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(DoublyLinkedList::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new doubly linked list. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "append" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                list.append(value.clone());
                Ok(ToolResponse::text(format!(
                    "Appended '{value}' to the doubly linked list."
                )))
            }
            "prepend" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                list.prepend(value.clone());
                Ok(ToolResponse::text(format!(
                    "Prepended '{value}' to the doubly linked list."
                )))
            }
            "delete" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(match list.delete(&value) {
                    Some(deleted) => format!("Deleted '{deleted}' from the doubly linked list."),
                    None => format!("The doubly linked list does not contain '{value}'."),
                }))
            }
            "find" => {
                let value = required_value(request)?.to_string();
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if list.contains(&value) {
                    format!("Found '{value}' in the doubly linked list.")
                } else {
                    format!("The doubly linked list does not contain '{value}'.")
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
            "toArrayReverse" => {
                let list = instance_mut(&mut self.registry, request, TOOL)?;
                let values = list.to_vec_reverse();
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
