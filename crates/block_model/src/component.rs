//! Component palette registry
//!
//! The palette the shell renders on the left side of the editor: an ordered
//! list of component kinds, addressable by key. Rendering/preview callbacks
//! live in the shell; the model only keeps the lookup table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for one palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Unique key, referenced by `Block::component_key`
    pub key: String,
    /// Human-readable palette label
    pub label: String,
}

impl ComponentMeta {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// The component lookup table: registration order for palette display plus
/// a key index for block instantiation. Registering an existing key
/// overwrites the entry in place.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    order: Vec<String>,
    by_key: HashMap<String, ComponentMeta>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component, overwriting any previous entry with the same key
    pub fn register(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let meta = ComponentMeta::new(key, label);
        if !self.by_key.contains_key(&meta.key) {
            self.order.push(meta.key.clone());
        }
        self.by_key.insert(meta.key.clone(), meta);
    }

    /// Look up a component by key
    pub fn get(&self, key: &str) -> Option<&ComponentMeta> {
        self.by_key.get(key)
    }

    /// Check whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Components in registration order, for palette display
    pub fn components(&self) -> impl Iterator<Item = &ComponentMeta> {
        self.order.iter().filter_map(|k| self.by_key.get(k))
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
