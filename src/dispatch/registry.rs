//! Per-tool instance registry.

use std::collections::HashMap;

/// An in-memory registry mapping opaque generated identifiers to instances.
///
/// Each tool handler owns one registry; `create` requests mint a fresh
/// identifier (`<prefix>_<counter>`) and every later request addresses its
/// instance through it. At most one instance lives under an identifier, and
/// identifiers are never reused within a registry's lifetime.
pub struct InstanceRegistry<T> {
    instances: HashMap<String, T>,
    prefix: &'static str,
    next_id: u64,
}

impl<T> InstanceRegistry<T> {
    /// Creates an empty registry minting ids under `prefix`.
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            instances: HashMap::new(),
            prefix,
            next_id: 0,
        }
    }

    /// Registers `instance` and returns its freshly minted identifier.
    pub fn create(&mut self, instance: T) -> String {
        self.next_id += 1;
        let id = format!("{}_{}", self.prefix, self.next_id);
        tracing::debug!(instance_id = %id, "registered instance");
        self.instances.insert(id.clone(), instance);
        id
    }

    /// Returns the instance registered under `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.instances.get(id)
    }

    /// Returns the instance registered under `id` mutably, if any.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.instances.get_mut(id)
    }

    /// Returns the number of live instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if no instances are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
