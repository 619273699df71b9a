//! Handler for the queue tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::queue::Queue;

use super::{instance_mut, required_value};

pub(crate) const TOOL: &str = "queue";

pub(crate) struct QueueHandler {
    registry: InstanceRegistry<Queue<String>>,
}

impl QueueHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("queue"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(Queue::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new queue. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "isEmpty" => {
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if queue.is_empty() {
                    "The queue is empty."
                } else {
                    "The queue is not empty."
                }))
            }
            "enqueue" => {
                let value = required_value(request)?.to_string();
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                queue.enqueue(value.clone());
                Ok(ToolResponse::text(format!(
                    "Enqueued '{value}' into the queue."
                )))
            }
            "dequeue" => {
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match queue.dequeue() {
                    Some(value) => ToolResponse::with_metadata(
                        format!("Dequeued '{value}' from the queue."),
                        json!({ "value": value }),
                    ),
                    None => ToolResponse::text("The queue is empty."),
                })
            }
            "peek" => {
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match queue.peek() {
                    Some(value) => ToolResponse::text(format!("Front of the queue: '{value}'.")),
                    None => ToolResponse::text("The queue is empty."),
                })
            }
            "toString" => {
                let queue = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(queue.to_string()))
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
