//! Construction of the schema registry from host-supplied tables.

use smol_str::SmolStr;

use super::def::{ComponentDefinition, PropertyEntry};
use super::registry::SchemaRegistry;

/// Builds a [`SchemaRegistry`] from the two host-supplied tables: the
/// component-definition table and the flat style table. The root
/// aggregate's per-namespace generic bags are registered separately from
/// the component types.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    registry: SchemaRegistry,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one entry of a namespace root's generic bag.
    pub fn namespace_entry(mut self, root: &str, key: &str, entry: PropertyEntry) -> Self {
        self.registry
            .namespaces
            .entry(SmolStr::new(root))
            .or_default()
            .insert(SmolStr::new(key), entry);
        self
    }

    /// Register a component type. Re-registering a name replaces the
    /// definition.
    pub fn component(mut self, name: &str, def: ComponentDefinition) -> Self {
        self.registry.definitions.insert(SmolStr::new(name), def);
        self
    }

    /// Register one entry of the flat style table.
    pub fn style_entry(mut self, name: &str, entry: PropertyEntry) -> Self {
        self.registry.style.insert(SmolStr::new(name), entry);
        self
    }

    pub fn build(self) -> SchemaRegistry {
        self.registry
    }
}
