//! Component-identity resolution for object literals.
//!
//! Three strategies, tried strictly in order; the first non-empty result
//! wins. When the identity is declared in another document, the scan walks
//! every document transitively reachable through `//@import` lists, in
//! breadth-first order — whichever file is scanned first determines the
//! result, and conflicting declarations are not reconciled.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::constants::{KEY_LIBRARY_COMPONENT_ID, KEY_TYPE};
use crate::project::{Document, DocumentGraph};
use crate::syntax::{AssignExpr, AstNode, MemberExpr, ObjectExpr, Property, SyntaxKind};

/// Resolve which component type an object literal instantiates.
///
/// Returns None when no strategy succeeds; callers treat that as "no
/// schema-backed completions", never as an error.
pub fn resolve_identity(
    obj: &ObjectExpr,
    doc: &Document,
    graph: &mut DocumentGraph,
) -> Option<SmolStr> {
    if let Some(name) = local_discriminator(obj) {
        trace!("[IDENTITY] local discriminator: {}", name);
        return Some(name);
    }
    if let Some(name) = from_library_component_id(obj, doc, graph) {
        trace!("[IDENTITY] via libraryComponentId: {}", name);
        return Some(name);
    }
    if let Some(name) = from_enclosing_property_name(obj, doc, graph) {
        trace!("[IDENTITY] via enclosing property name: {}", name);
        return Some(name);
    }
    None
}

/// Strategy 1: a direct `type` property with a string value.
fn local_discriminator(obj: &ObjectExpr) -> Option<SmolStr> {
    obj.properties()
        .find(|p| p.key_name().as_deref() == Some(KEY_TYPE))
        .and_then(|p| p.string_value())
}

/// Strategy 2: a direct `libraryComponentId` property naming a component
/// declared in an imported document, either as an assignment target
/// (`lib.widgetA = { type: ... }`) or as a property key
/// (`widgetA: { type: ... }`).
fn from_library_component_id(
    obj: &ObjectExpr,
    doc: &Document,
    graph: &mut DocumentGraph,
) -> Option<SmolStr> {
    let id = obj
        .properties()
        .find(|p| p.key_name().as_deref() == Some(KEY_LIBRARY_COMPONENT_ID))?
        .string_value()?;

    for imported in import_closure(doc, graph) {
        for node in imported.syntax().descendants() {
            let declared = match node.kind() {
                SyntaxKind::ASSIGN_EXPR => AssignExpr::cast(node).and_then(|assign| {
                    let target = MemberExpr::cast(assign.lhs()?)?;
                    if target.name().as_deref() != Some(id.as_str()) {
                        return None;
                    }
                    local_discriminator(&ObjectExpr::cast(assign.rhs()?)?)
                }),
                SyntaxKind::PROPERTY => Property::cast(node).and_then(|prop| {
                    if prop.key_name().as_deref() != Some(id.as_str()) {
                        return None;
                    }
                    local_discriminator(&ObjectExpr::cast(prop.value()?)?)
                }),
                _ => None,
            };
            if declared.is_some() {
                return declared;
            }
        }
    }
    None
}

/// Strategy 3: the key the object literal sits under, declared as a
/// property with a discriminated object value in an imported document.
fn from_enclosing_property_name(
    obj: &ObjectExpr,
    doc: &Document,
    graph: &mut DocumentGraph,
) -> Option<SmolStr> {
    let key = obj.parent_property()?.key_name()?;

    for imported in import_closure(doc, graph) {
        for node in imported.syntax().descendants() {
            let Some(prop) = Property::cast(node) else { continue };
            if prop.key_name().as_deref() != Some(key.as_str()) {
                continue;
            }
            let Some(candidate) = prop.value().and_then(ObjectExpr::cast) else { continue };
            if let Some(name) = local_discriminator(&candidate) {
                return Some(name);
            }
        }
    }
    None
}

/// Documents transitively reachable through this document's import list,
/// in breadth-first order. Documents are loaded lazily; missing ones are
/// skipped and contribute no match.
fn import_closure(doc: &Document, graph: &mut DocumentGraph) -> Vec<Arc<Document>> {
    let mut visited: FxHashSet<SmolStr> = FxHashSet::default();
    visited.insert(doc.name().clone());

    let mut queue: VecDeque<SmolStr> = VecDeque::new();
    for name in doc.imports() {
        if visited.insert(name.clone()) {
            queue.push_back(name.clone());
        }
    }

    let mut docs = Vec::new();
    while let Some(name) = queue.pop_front() {
        let Some(imported) = graph.document(&name) else {
            trace!("[IMPORTS] unresolved import: {}", name);
            continue;
        };
        for next in imported.imports() {
            if visited.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
        docs.push(imported);
    }
    docs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Dialect;

    fn first_object(doc: &Document) -> ObjectExpr {
        doc.syntax()
            .descendants()
            .find_map(ObjectExpr::cast)
            .expect("no object literal")
    }

    fn graph_with(files: &[(&str, &str)]) -> DocumentGraph {
        let mut graph = DocumentGraph::new();
        for (name, text) in files {
            graph.insert_with_dialect(name, (*text).to_string(), Dialect::Source);
        }
        graph
    }

    #[test]
    fn test_local_discriminator_wins() {
        let doc = Document::parse(
            "a.js",
            "x = { type: 'Button', libraryComponentId: 'other' };".into(),
            Dialect::Source,
        );
        let mut graph = DocumentGraph::new();
        let obj = first_object(&doc);
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Button");
    }

    #[test]
    fn test_string_key_discriminator() {
        let doc = Document::parse("a.js", "x = { 'type': 'Image' };".into(), Dialect::Source);
        let mut graph = DocumentGraph::new();
        let obj = first_object(&doc);
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Image");
    }

    #[test]
    fn test_library_component_id_via_assignment() {
        let mut graph = graph_with(&[("lib.js", "lib.widgetA = { type: 'Button' };")]);
        let doc = Document::parse(
            "b.js",
            "//@import lib.js\nx = { libraryComponentId: 'widgetA' };".into(),
            Dialect::Source,
        );
        let obj = first_object(&doc);
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Button");
    }

    #[test]
    fn test_library_component_id_via_property_key() {
        let mut graph = graph_with(&[(
            "lib.js",
            "page = { components: { widgetA: { type: 'Image' } } };",
        )]);
        let doc = Document::parse(
            "b.js",
            "//@import lib.js\nx = { libraryComponentId: 'widgetA' };".into(),
            Dialect::Source,
        );
        let obj = first_object(&doc);
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Image");
    }

    #[test]
    fn test_transitive_imports_are_searched() {
        let mut graph = graph_with(&[
            ("mid.js", "//@import deep.js\nx = 1;"),
            ("deep.js", "lib.widgetA = { type: 'Container' };"),
        ]);
        let doc = Document::parse(
            "b.js",
            "//@import mid.js\nx = { libraryComponentId: 'widgetA' };".into(),
            Dialect::Source,
        );
        let obj = first_object(&doc);
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Container");
    }

    #[test]
    fn test_import_order_decides_conflicts() {
        let mut graph = graph_with(&[
            ("first.js", "lib.widgetA = { type: 'Button' };"),
            ("second.js", "lib.widgetA = { type: 'Image' };"),
        ]);
        let doc = Document::parse(
            "b.js",
            "//@import first.js\n//@import second.js\nx = { libraryComponentId: 'widgetA' };".into(),
            Dialect::Source,
        );
        let obj = first_object(&doc);
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Button");
    }

    #[test]
    fn test_enclosing_property_name() {
        let mut graph = graph_with(&[(
            "lib.js",
            "page = { components: { header: { type: 'Container' } } };",
        )]);
        let doc = Document::parse(
            "b.js",
            "//@import lib.js\nx = { components: { header: { title: 'Welcome' } } };".into(),
            Dialect::Source,
        );
        // resolve the object under the `header` key
        let obj = doc
            .syntax()
            .descendants()
            .filter_map(ObjectExpr::cast)
            .find(|o| {
                o.parent_property()
                    .and_then(|p| p.key_name())
                    .as_deref()
                    == Some("header")
            })
            .unwrap();
        assert_eq!(resolve_identity(&obj, &doc, &mut graph).unwrap(), "Container");
    }

    #[test]
    fn test_missing_import_degrades_to_none() {
        let mut graph = DocumentGraph::new();
        let doc = Document::parse(
            "b.js",
            "//@import gone.js\nx = { libraryComponentId: 'widgetA' };".into(),
            Dialect::Source,
        );
        let obj = first_object(&doc);
        assert!(resolve_identity(&obj, &doc, &mut graph).is_none());
    }

    #[test]
    fn test_import_cycle_terminates() {
        let mut graph = graph_with(&[
            ("a.js", "//@import b.js\nx = 1;"),
            ("b.js", "//@import a.js\ny = 1;"),
        ]);
        let doc = Document::parse(
            "c.js",
            "//@import a.js\nx = { libraryComponentId: 'nowhere' };".into(),
            Dialect::Source,
        );
        let obj = first_object(&doc);
        assert!(resolve_identity(&obj, &doc, &mut graph).is_none());
    }
}
