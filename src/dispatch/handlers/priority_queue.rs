//! Handler for the priority queue tool.

use std::cmp::Ordering;

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::priority_queue::PriorityQueue;

use super::{instance_mut, required_priority, required_value};

pub(crate) const TOOL: &str = "priority-queue";

pub(crate) struct PriorityQueueHandler {
    registry: InstanceRegistry<PriorityQueue<String>>,
}

impl PriorityQueueHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("priority_queue"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(PriorityQueue::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new priority queue. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "add" => {
                let value = required_value(request)?.to_string();
                let priority = required_priority(request)?;
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                queue.add(value.clone(), priority);
                Ok(ToolResponse::text(format!(
                    "Added '{value}' with priority {priority}."
                )))
            }
            "remove" => {
                let value = required_value(request)?.to_string();
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                queue.remove(&value);
                Ok(ToolResponse::text(format!(
                    "Removed '{value}' from the priority queue."
                )))
            }
            "changePriority" => {
                let value = required_value(request)?.to_string();
                let priority = required_priority(request)?;
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                queue.change_priority(&value, priority);
                Ok(ToolResponse::text(format!(
                    "Changed the priority of '{value}' to {priority}."
                )))
            }
            "findByValue" => {
                let value = required_value(request)?.to_string();
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                let found_indices = queue.find_by_value(&value);
                Ok(ToolResponse::with_metadata(
                    if found_indices.is_empty() {
                        format!("The priority queue does not contain '{value}'.")
                    } else {
                        format!("Found '{value}' in the priority queue.")
                    },
                    json!({ "foundIndices": found_indices }),
                ))
            }
            "hasValue" => {
                let value = required_value(request)?.to_string();
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if queue.has_value(&value) {
                    format!("The priority queue contains '{value}'.")
                } else {
                    format!("The priority queue does not contain '{value}'.")
                }))
            }
            "compareValue" => {
                let first = request
                    .value1
                    .as_deref()
                    .ok_or_else(|| DispatchError::MissingValue {
                        operation: request.operation.clone(),
                    })?;
                let second = request
                    .value2
                    .as_deref()
                    .ok_or_else(|| DispatchError::MissingValue {
                        operation: request.operation.clone(),
                    })?;
                let comparison = match first.cmp(second) {
                    Ordering::Less => -1,
                    Ordering::Equal => 0,
                    Ordering::Greater => 1,
                };
                Ok(ToolResponse::with_metadata(
                    format!("Comparing '{first}' and '{second}': {comparison}."),
                    json!({ "comparison": comparison }),
                ))
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
