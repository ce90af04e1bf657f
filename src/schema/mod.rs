//! The component schema: definitions, inheritance chains, enum tables,
//! and the flat style table.
//!
//! The registry is built once from host-supplied tables and is read-only
//! at query time. Lookups that span the inheritance chain live here so the
//! completion layer never walks `proto` pointers itself.

mod builder;
mod def;
mod registry;

pub use builder::SchemaBuilder;
pub use def::{BagKind, ComponentDefinition, EnumTable, PropertyEntry, PropertyMap, ValueType};
pub use registry::SchemaRegistry;
