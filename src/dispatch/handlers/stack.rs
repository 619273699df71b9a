//! Handler for the stack tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::stack::Stack;

use super::{instance_mut, required_value};

pub(crate) const TOOL: &str = "stack";

pub(crate) struct StackHandler {
    registry: InstanceRegistry<Stack<String>>,
}

impl StackHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("stack"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(Stack::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new stack. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "isEmpty" => {
                let stack = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if stack.is_empty() {
                    "The stack is empty."
                } else {
                    "The stack is not empty."
                }))
            }
            "push" => {
                let value = required_value(request)?.to_string();
                let stack = instance_mut(&mut self.registry, request, TOOL)?;
                stack.push(value.clone());
                Ok(ToolResponse::text(format!(
                    "Pushed '{value}' onto the stack."
                )))
            }
            "pop" => {
                let stack = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match stack.pop() {
                    Some(value) => ToolResponse::with_metadata(
                        format!("Popped '{value}' off the stack."),
                        json!({ "value": value }),
                    ),
                    None => ToolResponse::text("The stack is empty."),
                })
            }
            "peek" => {
                let stack = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match stack.peek() {
                    Some(value) => ToolResponse::text(format!("Top of the stack: '{value}'.")),
                    None => ToolResponse::text("The stack is empty."),
                })
            }
            "toArray" => {
                let stack = instance_mut(&mut self.registry, request, TOOL)?;
                let values = stack.to_vec();
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
