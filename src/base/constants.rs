//! Domain constants for dashboard definition documents.
//!
//! These are the property keys and object paths the engine recognizes in
//! documents, and the schema-side names they map to.

/// Discriminator key naming the component type an object literal instantiates.
pub const KEY_TYPE: &str = "type";

/// Key referencing a component declared in another (imported) document.
pub const KEY_LIBRARY_COMPONENT_ID: &str = "libraryComponentId";

/// Bag key for per-component properties.
pub const KEY_PROPERTIES: &str = "properties";

/// Document-side bag key for settings.
pub const KEY_SETTINGS: &str = "settings";

/// Schema-side name of the settings bag (`settings` aliases to this).
pub const KEY_DEFAULT_SETTINGS: &str = "defaultSettings";

/// Bag key for methods and fields reachable through `this`.
pub const KEY_PROTOTYPE: &str = "prototype";

/// Key of the child-component collection.
pub const KEY_COMPONENTS: &str = "components";

/// Style object key (completes from the style table).
pub const KEY_STYLE: &str = "style";

/// Body-style object key (same table as `style`).
pub const KEY_BODY_STYLE: &str = "bodyStyle";

/// The four namespace roots a definition document can assign into.
pub const ROOT_LIBRARY: &str = "Library";
pub const ROOT_SITES: &str = "Sites";
pub const ROOT_CONSTRUCTS: &str = "Constructs";
pub const ROOT_PACKAGES: &str = "Packages";

/// All recognized namespace roots, in declaration order.
pub const NAMESPACE_ROOTS: [&str; 4] = [ROOT_LIBRARY, ROOT_SITES, ROOT_CONSTRUCTS, ROOT_PACKAGES];

/// Global object definitions hang off of (`_DP.Definition.Library.x = {}`).
pub const DEFINITION_OBJECT: &str = "_DP";

/// Member of [`DEFINITION_OBJECT`] that holds the namespace roots.
pub const DEFINITION_MEMBER: &str = "Definition";

/// Path prefix for component constant tables (`_DP.ComponentTypes.Widget.SMALL`).
pub const COMPONENT_TYPES_PATH: &str = "_DP.ComponentTypes";

/// Synthetic assignment injected before data-dialect documents so the
/// parser sees an executable statement. Offsets into a data document are
/// shifted by this prefix's length before any tree lookup.
pub const DATA_PREFIX: &str = "_DP.Definition.Library.__$=";

/// Base name for generated component identifiers.
pub const FRESH_ID_BASE: &str = "component";

/// Proto chains are acyclic by construction of the schema; the walk still
/// carries a depth bound so a malformed table cannot loop.
pub const MAX_PROTO_DEPTH: usize = 32;

/// Bound on the outward walk that resolves the component enclosing a
/// `this` expression.
pub const MAX_THIS_CONTEXT_DEPTH: usize = 5;
