//! The read-only schema registry and its chain-aware lookups.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::constants::MAX_PROTO_DEPTH;

use super::def::{BagKind, ComponentDefinition, EnumTable, PropertyEntry, PropertyMap};

/// All schema content for one analysis session.
///
/// `definitions` holds the component types; the root aggregate is not a
/// component type — its per-namespace generic bags live in `namespaces`,
/// so enumerating component names never has to exclude it. `style` is the
/// flat style-property table.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    pub(super) definitions: IndexMap<SmolStr, ComponentDefinition>,
    pub(super) namespaces: IndexMap<SmolStr, PropertyMap>,
    pub(super) style: PropertyMap,
}

impl SchemaRegistry {
    pub fn definition(&self, name: &str) -> Option<&ComponentDefinition> {
        self.definitions.get(name)
    }

    /// Registered component type names, in registration order.
    pub fn component_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.definitions.keys()
    }

    /// The generic bag for a namespace root (`Library`, `Sites`, ...).
    pub fn namespace(&self, name: &str) -> Option<&PropertyMap> {
        self.namespaces.get(name)
    }

    /// The flat style-property table.
    pub fn style(&self) -> &PropertyMap {
        &self.style
    }

    /// The proto chain starting at `name`, most-derived first.
    ///
    /// Missing parents end the chain. The walk is depth-bounded and keeps a
    /// visited set, so a cyclic table yields a truncated chain instead of
    /// looping.
    pub fn proto_chain(&self, name: &str) -> Vec<(&SmolStr, &ComponentDefinition)> {
        let mut chain = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut current = self.definitions.get_key_value(name);
        while let Some((def_name, def)) = current {
            if chain.len() >= MAX_PROTO_DEPTH || !seen.insert(def_name.as_str()) {
                trace!("[SCHEMA] proto chain truncated at {}", def_name);
                break;
            }
            chain.push((def_name, def));
            current = def
                .proto
                .as_ref()
                .and_then(|parent| self.definitions.get_key_value(parent.as_str()));
        }
        chain
    }

    /// Look up one entry by component, document-side bag key, and entry
    /// name, walking the inheritance chain. The most-derived declaration
    /// wins. `settings` aliases to the `defaultSettings` bag.
    pub fn lookup_entry(
        &self,
        component: &str,
        bag_key: &str,
        entry: &str,
    ) -> Option<&PropertyEntry> {
        let bag = BagKind::for_key(bag_key)?;
        self.proto_chain(component)
            .into_iter()
            .find_map(|(_, def)| def.bag(bag).get(entry))
    }

    /// Resolve a `!data` indirection path (`Widget.SIZE`) to the component
    /// and table it names. Paths that do not name an existing table resolve
    /// to nothing.
    pub fn resolve_data_ref(&self, path: &str) -> Option<(SmolStr, SmolStr)> {
        let mut parts = path.split('.');
        let component = parts.next()?;
        let table = parts.next()?;
        if table.is_empty() || parts.next().is_some() {
            trace!("[SCHEMA] unsupported data path: {}", path);
            return None;
        }
        let def = self.definition(component)?;
        def.enums
            .contains_key(table)
            .then(|| (SmolStr::new(component), SmolStr::new(table)))
    }

    /// Members of a named constant table.
    pub fn enum_members(&self, component: &str, table: &str) -> Option<&EnumTable> {
        self.definition(component)?.enums.get(table)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::SchemaBuilder;
    use super::*;
    use crate::schema::PropertyEntry;

    fn registry() -> SchemaRegistry {
        SchemaBuilder::new()
            .component(
                "Base",
                ComponentDefinition::new()
                    .property("title", PropertyEntry::typed("string"))
                    .property("visible", PropertyEntry::typed("bool")),
            )
            .component(
                "Widget",
                ComponentDefinition::new()
                    .with_proto("Base")
                    .property("size", PropertyEntry::typed("string").with_data("Widget.SIZE"))
                    .enum_table("SIZE", &[("SMALL", "string"), ("LARGE", "string")]),
            )
            .build()
    }

    #[test]
    fn test_proto_chain_order() {
        let registry = registry();
        let names: Vec<_> = registry
            .proto_chain("Widget")
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Widget", "Base"]);
    }

    #[test]
    fn test_proto_chain_cycle_is_bounded() {
        let registry = SchemaBuilder::new()
            .component("A", ComponentDefinition::new().with_proto("B"))
            .component("B", ComponentDefinition::new().with_proto("A"))
            .build();
        let names: Vec<_> = registry
            .proto_chain("A")
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_lookup_entry_walks_chain() {
        let registry = registry();
        let entry = registry.lookup_entry("Widget", "properties", "visible").unwrap();
        assert!(entry.is_bool());
    }

    #[test]
    fn test_resolve_data_ref() {
        let registry = registry();
        let (component, table) = registry.resolve_data_ref("Widget.SIZE").unwrap();
        assert_eq!(component, "Widget");
        assert_eq!(table, "SIZE");
        assert!(registry.resolve_data_ref("Widget.MISSING").is_none());
        assert!(registry.resolve_data_ref("Widget").is_none());
        assert!(registry.resolve_data_ref("Widget.SIZE.SMALL").is_none());
    }
}
