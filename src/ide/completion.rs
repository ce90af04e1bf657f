//! Completion generation.
//!
//! Turns a classified cursor context into the candidate list: literal
//! prefix filter (case-sensitive, against the canonical name), dedup by
//! name with the first occurrence winning, no further ranking. Ordering
//! follows schema enumeration order.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::Dialect;
use crate::base::constants::{COMPONENT_TYPES_PATH, FRESH_ID_BASE, ROOT_LIBRARY};
use crate::schema::{BagKind, PropertyEntry, PropertyMap, SchemaRegistry};

use super::classify::{ExprKind, PropertyTarget};

/// A completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert (quoted-key form in data-dialect documents).
    pub name: SmolStr,
    /// The bare label shown in the list.
    pub display: SmolStr,
    /// Declared value-type label (`string`, `bool`, `[]`, `object`, ...).
    pub type_label: SmolStr,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
}

impl CompletionItem {
    fn new(name: impl Into<SmolStr>, display: impl Into<SmolStr>, label: &str) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
            type_label: SmolStr::new(label),
            documentation: None,
        }
    }

    fn with_documentation(mut self, doc: Option<Arc<str>>) -> Self {
        self.documentation = doc;
        self
    }
}

/// The result of one completion request: the range of the already-typed
/// word (original-text offsets) and the candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSet {
    pub range: TextRange,
    pub items: Vec<CompletionItem>,
}

impl CompletionSet {
    pub fn empty(offset: TextSize) -> Self {
        Self {
            range: TextRange::empty(offset),
            items: Vec::new(),
        }
    }
}

/// Generate the candidate list for a classified context.
pub fn completions(
    schema: &SchemaRegistry,
    kind: &ExprKind,
    prefix: &str,
    dialect: Dialect,
) -> Vec<CompletionItem> {
    match kind {
        ExprKind::NoMatch => Vec::new(),
        ExprKind::TypeDiscriminator => discriminator_names(schema, prefix),
        ExprKind::ComponentsCollection { existing } => {
            fresh_identifier(existing, prefix, dialect, true)
        }
        ExprKind::FreshIdentifier => fresh_identifier(&[], prefix, dialect, false),
        ExprKind::Style => gather_flat(schema.style(), prefix, dialect),
        ExprKind::Property(target) => property_completions(schema, target, prefix, dialect),
        ExprKind::BooleanValue => boolean_values(prefix),
        ExprKind::EnumIndirection { component, table } => {
            enum_constants(schema, component, table, prefix)
        }
        // Prototype members complete after `this.` — always bare names.
        ExprKind::ThisContext { component } => {
            gather_bag(schema, component, BagKind::Prototype, prefix, Dialect::Source)
        }
    }
}

fn property_completions(
    schema: &SchemaRegistry,
    target: &PropertyTarget,
    prefix: &str,
    dialect: Dialect,
) -> Vec<CompletionItem> {
    match target {
        PropertyTarget::Namespace(root) => schema
            .namespace(root)
            .map(|bag| gather_flat(bag, prefix, dialect))
            .unwrap_or_default(),
        PropertyTarget::Bag { component, bag } => {
            gather_bag(schema, component, *bag, prefix, dialect)
        }
        PropertyTarget::Nested {
            component,
            bag_key,
            entry,
        } => gather_nested(schema, component, bag_key, entry, prefix, dialect),
    }
}

/// Every registered component type name. The root aggregate is stored
/// outside the definitions table, so nothing has to be excluded here.
fn discriminator_names(schema: &SchemaRegistry, prefix: &str) -> Vec<CompletionItem> {
    schema
        .component_names()
        .filter(|name| name.starts_with(prefix))
        .map(|name| {
            let doc = schema.definition(name).and_then(|d| d.doc.clone());
            CompletionItem::new(name.clone(), name.clone(), "string").with_documentation(doc)
        })
        .collect()
}

/// Entries of a flat table (style table, namespace generic bags).
fn gather_flat(bag: &PropertyMap, prefix: &str, dialect: Dialect) -> Vec<CompletionItem> {
    bag.iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(name, entry)| entry_item(name, entry, dialect))
        .collect()
}

/// A component bag gathered across the proto chain. A locally-declared
/// entry shadows an inherited one of the same name.
fn gather_bag(
    schema: &SchemaRegistry,
    component: &str,
    bag: BagKind,
    prefix: &str,
    dialect: Dialect,
) -> Vec<CompletionItem> {
    let mut seen: FxHashSet<SmolStr> = FxHashSet::default();
    let mut items = Vec::new();
    for (_, def) in schema.proto_chain(component) {
        for (name, entry) in def.bag(bag) {
            if !name.starts_with(prefix) || !seen.insert(name.clone()) {
                continue;
            }
            items.push(entry_item(name, entry, dialect));
        }
    }
    items
}

/// Children of a nested bag entry; the most-derived declaration of the
/// entry wins. An empty result falls back to the generic root bag.
fn gather_nested(
    schema: &SchemaRegistry,
    component: &str,
    bag_key: &str,
    entry: &str,
    prefix: &str,
    dialect: Dialect,
) -> Vec<CompletionItem> {
    for (_, def) in schema.proto_chain(component) {
        let Some(found) = def.raw_bag(bag_key).and_then(|bag| bag.get(entry)) else {
            continue;
        };
        let items = gather_flat(&found.children, prefix, dialect);
        if !items.is_empty() {
            return items;
        }
        break;
    }
    schema
        .namespace(ROOT_LIBRARY)
        .map(|bag| gather_flat(bag, prefix, dialect))
        .unwrap_or_default()
}

/// Exactly `true`, `false` — and only when nothing has been typed yet.
fn boolean_values(prefix: &str) -> Vec<CompletionItem> {
    if !prefix.is_empty() {
        return Vec::new();
    }
    vec![
        CompletionItem::new("true", "true", "bool"),
        CompletionItem::new("false", "false", "bool"),
    ]
}

/// Members of a constant table, as component-qualified constant paths.
fn enum_constants(
    schema: &SchemaRegistry,
    component: &str,
    table: &str,
    prefix: &str,
) -> Vec<CompletionItem> {
    let Some(members) = schema.enum_members(component, table) else {
        return Vec::new();
    };
    members
        .iter()
        .map(|(member, value_type)| {
            let path = format!("{COMPONENT_TYPES_PATH}.{component}.{member}");
            CompletionItem::new(path, member.clone(), value_type.label())
        })
        .filter(|item| item.name.starts_with(prefix))
        .collect()
}

/// One synthetic, collision-avoidant identifier — and only when nothing
/// has been typed yet.
fn fresh_identifier(
    existing: &[SmolStr],
    prefix: &str,
    dialect: Dialect,
    as_key: bool,
) -> Vec<CompletionItem> {
    if !prefix.is_empty() {
        return Vec::new();
    }
    let id = fresh_component_id(existing);
    let name = if as_key { key_insert(&id, dialect) } else { id.clone() };
    vec![CompletionItem::new(name, id, "object")]
}

/// The smallest `component<N>` not colliding with the sibling keys.
/// Deterministic, so repeated requests yield the same id.
fn fresh_component_id(existing: &[SmolStr]) -> SmolStr {
    let mut n = 1usize;
    loop {
        let candidate = SmolStr::new(format!("{FRESH_ID_BASE}{n}"));
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn entry_item(name: &SmolStr, entry: &PropertyEntry, dialect: Dialect) -> CompletionItem {
    CompletionItem::new(key_insert(name, dialect), name.clone(), entry.type_label())
        .with_documentation(entry.doc.clone())
}

/// Key-position insert text: data-dialect documents get the quoted form.
fn key_insert(name: &str, dialect: Dialect) -> SmolStr {
    match dialect {
        Dialect::Source => SmolStr::new(name),
        Dialect::Data => SmolStr::new(format!("\"{name}\": ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ComponentDefinition, SchemaBuilder};

    fn schema() -> SchemaRegistry {
        SchemaBuilder::new()
            .namespace_entry("Library", "type", PropertyEntry::typed("string"))
            .namespace_entry("Library", "properties", PropertyEntry::untyped())
            .component(
                "Base",
                ComponentDefinition::new()
                    .property("title", PropertyEntry::typed("string").with_doc("Title text"))
                    .property("visible", PropertyEntry::typed("bool"))
                    .property("tags", PropertyEntry::typed("[]")),
            )
            .component(
                "Widget",
                ComponentDefinition::new()
                    .with_proto("Base")
                    .property("title", PropertyEntry::typed("string").with_doc("Widget title"))
                    .property("size", PropertyEntry::typed("string").with_data("Widget.SIZE"))
                    .method("draw", PropertyEntry::typed("fn()"))
                    .enum_table("SIZE", &[("SMALL", "string"), ("LARGE", "string")]),
            )
            .build()
    }

    fn names(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.display.as_str()).collect()
    }

    #[test]
    fn test_bag_inheritance_union_with_shadowing() {
        let items = gather_bag(&schema(), "Widget", BagKind::Properties, "", Dialect::Source);
        assert_eq!(names(&items), vec!["title", "size", "visible", "tags"]);
        // the shadowing (most-derived) declaration supplies the doc
        let title = items.iter().find(|i| i.display == "title").unwrap();
        assert_eq!(title.documentation.as_deref(), Some("Widget title"));
    }

    #[test]
    fn test_array_and_untyped_labels() {
        let items = gather_bag(&schema(), "Base", BagKind::Properties, "", Dialect::Source);
        let tags = items.iter().find(|i| i.display == "tags").unwrap();
        assert_eq!(tags.type_label, "[]");
    }

    #[test]
    fn test_boolean_exactness() {
        let items = boolean_values("");
        assert_eq!(names(&items), vec!["true", "false"]);
        assert!(boolean_values("t").is_empty());
    }

    #[test]
    fn test_enum_constants_are_qualified() {
        let items = enum_constants(&schema(), "Widget", "SIZE", "");
        assert_eq!(
            items[0].name.as_str(),
            "_DP.ComponentTypes.Widget.SMALL"
        );
        assert_eq!(items[0].display, "SMALL");
        assert_eq!(items[0].type_label, "string");
    }

    #[test]
    fn test_fresh_id_avoids_collisions() {
        let existing = vec![SmolStr::new("component1"), SmolStr::new("component3")];
        assert_eq!(fresh_component_id(&existing), "component2");
        assert_eq!(fresh_component_id(&[]), "component1");
    }

    #[test]
    fn test_fresh_id_quoted_in_data_dialect() {
        let items = fresh_identifier(&[], "", Dialect::Data, true);
        assert_eq!(items[0].name, "\"component1\": ");
        assert_eq!(items[0].display, "component1");
    }

    #[test]
    fn test_prefix_filter_is_literal_and_case_sensitive() {
        let items = gather_bag(&schema(), "Widget", BagKind::Properties, "ti", Dialect::Source);
        assert_eq!(names(&items), vec!["title"]);
        assert!(gather_bag(&schema(), "Widget", BagKind::Properties, "TI", Dialect::Source).is_empty());
    }
}
