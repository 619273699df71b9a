//! Handler for the heap tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::heap::Heap;

use super::{instance_mut, required_number};

pub(crate) const TOOL: &str = "heap";

pub(crate) struct HeapHandler {
    registry: InstanceRegistry<Heap<i64>>,
}

impl HeapHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("heap"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(Heap::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new heap. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "add" => {
                let value = required_number(request)?;
                let heap = instance_mut(&mut self.registry, request, TOOL)?;
                heap.add(value);
                Ok(ToolResponse::text(format!("Added '{value}' to the heap.")))
            }
            "poll" => {
                let heap = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match heap.poll() {
                    Some(value) => ToolResponse::with_metadata(
                        format!("Polled '{value}' from the heap."),
                        json!({ "polledValue": value }),
                    ),
                    None => ToolResponse::text("The heap is empty."),
                })
            }
            "find" => {
                let value = required_number(request)?;
                let heap = instance_mut(&mut self.registry, request, TOOL)?;
                let found_indices = heap.find(&value);
                Ok(ToolResponse::with_metadata(
                    if found_indices.is_empty() {
                        format!("The heap does not contain '{value}'.")
                    } else {
                        let rendered: Vec<String> = found_indices
                            .iter()
                            .map(|index| index.to_string())
                            .collect();
                        format!(
                            "Found '{value}' in the heap at indices: {}.",
                            rendered.join(", ")
                        )
                    },
                    json!({ "foundIndices": found_indices }),
                ))
            }
            "remove" => {
                let value = required_number(request)?;
                let heap = instance_mut(&mut self.registry, request, TOOL)?;
                heap.remove(&value);
                Ok(ToolResponse::text(format!(
                    "Removed '{value}' from the heap."
                )))
            }
            "toString" => {
                let heap = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(heap.to_string()))
            }
            "peek" => {
                let heap = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(match heap.peek() {
                    Some(value) => ToolResponse::with_metadata(
                        format!("Top of the heap: '{value}'."),
                        json!({ "peekedValue": value }),
                    ),
                    None => ToolResponse::text("The heap is empty."),
                })
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
