//! Handler for the hash table tool.

use serde_json::json;

use crate::dispatch::error::DispatchError;
use crate::dispatch::registry::InstanceRegistry;
use crate::dispatch::request::ToolRequest;
use crate::dispatch::response::ToolResponse;
use crate::hash_table::HashTable;

use super::{instance_mut, required_key, required_value};

pub(crate) const TOOL: &str = "hash-table";

pub(crate) struct HashTableHandler {
    registry: InstanceRegistry<HashTable<String>>,
}

impl HashTableHandler {
    pub(crate) fn new() -> Self {
        Self {
            registry: InstanceRegistry::new("hash_table"),
        }
    }

    pub(crate) fn handle(&mut self, request: &ToolRequest) -> Result<ToolResponse, DispatchError> {
        match request.operation.as_str() {
            "create" => {
                let id = self.registry.create(HashTable::new());
                Ok(ToolResponse::with_metadata(
                    format!("Created a new hash table. ID: {id}"),
                    json!({ "instanceId": id }),
                ))
            }
            "set" => {
                let key = required_key(request)?.to_string();
                let value = required_value(request)?.to_string();
                let table = instance_mut(&mut self.registry, request, TOOL)?;
                table.set(&key, value.clone());
                Ok(ToolResponse::text(format!(
                    "Stored '{value}' under '{key}'."
                )))
            }
            "get" => {
                let key = required_key(request)?.to_string();
                let table = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(match table.get(&key) {
                    Some(value) => format!("The value under '{key}' is '{value}'."),
                    None => format!("The hash table has no value under '{key}'."),
                }))
            }
            "delete" => {
                let key = required_key(request)?.to_string();
                let table = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if table.delete(&key) {
                    format!("Deleted '{key}' from the hash table.")
                } else {
                    format!("The hash table has no value under '{key}'.")
                }))
            }
            "has" => {
                let key = required_key(request)?.to_string();
                let table = instance_mut(&mut self.registry, request, TOOL)?;
                Ok(ToolResponse::text(if table.has(&key) {
                    format!("The hash table has a value under '{key}'.")
                } else {
                    format!("The hash table has no value under '{key}'.")
                }))
            }
            "getKeys" => {
                let table = instance_mut(&mut self.registry, request, TOOL)?;
                let keys = table.keys();
                Ok(ToolResponse::with_metadata(
                    keys.join(","),
                    json!({ "keys": keys }),
                ))
            }
            other => Err(DispatchError::UnknownOperation {
                tool: TOOL,
                operation: other.to_string(),
            }),
        }
    }
}
