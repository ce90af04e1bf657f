//! Component definitions and their member entries.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::constants::{KEY_DEFAULT_SETTINGS, KEY_PROPERTIES, KEY_PROTOTYPE, KEY_SETTINGS};

/// An ordered map of member entries. Iteration order is declaration order,
/// which drives completion order.
pub type PropertyMap = IndexMap<SmolStr, PropertyEntry>;

/// A named constant table (`SIZE: { SMALL, MEDIUM, LARGE }`).
pub type EnumTable = IndexMap<SmolStr, ValueType>;

/// Declared value type of a schema entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    Str,
    Number,
    Bool,
    /// Array-typed entries are labeled with the empty-bracket marker.
    Array,
    /// Function entries keep their raw signature token.
    Func(SmolStr),
    Other(SmolStr),
}

impl ValueType {
    /// Parse a declared type token (`string`, `bool`, `[]`, `fn(...)`, ...).
    pub fn parse(token: &str) -> ValueType {
        match token {
            "string" => ValueType::Str,
            "number" => ValueType::Number,
            "bool" => ValueType::Bool,
            "[]" => ValueType::Array,
            t if t.starts_with("fn") => ValueType::Func(SmolStr::new(t)),
            t => ValueType::Other(SmolStr::new(t)),
        }
    }

    /// Human-readable label shown next to a completion.
    pub fn label(&self) -> &str {
        match self {
            ValueType::Str => "string",
            ValueType::Number => "number",
            ValueType::Bool => "bool",
            ValueType::Array => "[]",
            ValueType::Func(_) => "fn()",
            ValueType::Other(token) => token,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ValueType::Bool)
    }
}

/// One member of a definition bag (or of the style table).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Declared value type; None means a generic object-shaped entry.
    pub value_type: Option<ValueType>,
    /// Documentation string.
    pub doc: Option<Arc<str>>,
    /// Reference URL.
    pub url: Option<Arc<str>>,
    /// Enum indirection: dotted path into another definition's constant
    /// table (`Widget.SIZE`).
    pub data_ref: Option<SmolStr>,
    /// Nested entries for object-shaped schemas (edit-mode descriptors etc.).
    pub children: PropertyMap,
}

impl PropertyEntry {
    /// An entry with a declared type token.
    pub fn typed(token: &str) -> Self {
        Self {
            value_type: Some(ValueType::parse(token)),
            ..Self::default()
        }
    }

    /// An untyped, object-shaped entry.
    pub fn untyped() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(Arc::from(doc));
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(Arc::from(url));
        self
    }

    pub fn with_data(mut self, path: &str) -> Self {
        self.data_ref = Some(SmolStr::new(path));
        self
    }

    pub fn with_child(mut self, name: &str, entry: PropertyEntry) -> Self {
        self.children.insert(SmolStr::new(name), entry);
        self
    }

    /// Label for the completion list; untyped entries read as `object`.
    pub fn type_label(&self) -> &str {
        self.value_type.as_ref().map(ValueType::label).unwrap_or("object")
    }

    pub fn is_bool(&self) -> bool {
        self.value_type.as_ref().map(ValueType::is_bool).unwrap_or(false)
    }
}

/// Which member bag of a component a document key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagKind {
    Properties,
    /// Document key `settings`; the schema-side bag is `defaultSettings`.
    Settings,
    Prototype,
}

impl BagKind {
    /// Map a document-side key to the bag it addresses.
    pub fn for_key(key: &str) -> Option<BagKind> {
        match key {
            KEY_PROPERTIES => Some(BagKind::Properties),
            KEY_SETTINGS => Some(BagKind::Settings),
            KEY_PROTOTYPE => Some(BagKind::Prototype),
            _ => None,
        }
    }

    /// The schema-side bag name.
    pub fn schema_name(self) -> &'static str {
        match self {
            BagKind::Properties => KEY_PROPERTIES,
            BagKind::Settings => KEY_DEFAULT_SETTINGS,
            BagKind::Prototype => KEY_PROTOTYPE,
        }
    }
}

/// A named component type in the schema.
#[derive(Debug, Clone, Default)]
pub struct ComponentDefinition {
    /// Parent definition; forms the single-inheritance proto chain.
    pub proto: Option<SmolStr>,
    pub doc: Option<Arc<str>>,
    pub properties: PropertyMap,
    pub default_settings: PropertyMap,
    pub prototype: PropertyMap,
    /// Named constant tables, targets of `!data` indirections.
    pub enums: IndexMap<SmolStr, EnumTable>,
}

impl ComponentDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proto(mut self, parent: &str) -> Self {
        self.proto = Some(SmolStr::new(parent));
        self
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(Arc::from(doc));
        self
    }

    pub fn property(mut self, name: &str, entry: PropertyEntry) -> Self {
        self.properties.insert(SmolStr::new(name), entry);
        self
    }

    pub fn setting(mut self, name: &str, entry: PropertyEntry) -> Self {
        self.default_settings.insert(SmolStr::new(name), entry);
        self
    }

    pub fn method(mut self, name: &str, entry: PropertyEntry) -> Self {
        self.prototype.insert(SmolStr::new(name), entry);
        self
    }

    pub fn enum_table(mut self, name: &str, members: &[(&str, &str)]) -> Self {
        let table: EnumTable = members
            .iter()
            .map(|(member, token)| (SmolStr::new(member), ValueType::parse(token)))
            .collect();
        self.enums.insert(SmolStr::new(name), table);
        self
    }

    /// The bag a document-side key addresses.
    pub fn bag(&self, bag: BagKind) -> &PropertyMap {
        match bag {
            BagKind::Properties => &self.properties,
            BagKind::Settings => &self.default_settings,
            BagKind::Prototype => &self.prototype,
        }
    }

    /// Look up a bag by its schema-side name. Nested-object resolution
    /// matches the raw key, so `settings` (the document alias) finds
    /// nothing here.
    pub fn raw_bag(&self, name: &str) -> Option<&PropertyMap> {
        match name {
            KEY_PROPERTIES => Some(&self.properties),
            KEY_DEFAULT_SETTINGS => Some(&self.default_settings),
            KEY_PROTOTYPE => Some(&self.prototype),
            _ => None,
        }
    }
}
