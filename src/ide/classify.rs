//! Cursor-context classification.
//!
//! Four classification attempts run in order; the first match wins. Each
//! attempt is three-valued: it can match, pass ("no opinion"), or reject.
//! A reject is a hard stop — a member expression that belongs to unrelated
//! code must not fall through to the weaker object-literal heuristics.

use smol_str::SmolStr;
use text_size::TextSize;
use tracing::trace;

use crate::base::constants::{
    DEFINITION_MEMBER, DEFINITION_OBJECT, KEY_BODY_STYLE, KEY_COMPONENTS, KEY_STYLE, KEY_TYPE,
    MAX_THIS_CONTEXT_DEPTH, NAMESPACE_ROOTS, ROOT_LIBRARY,
};
use crate::project::{Document, DocumentGraph};
use crate::schema::{BagKind, SchemaRegistry};
use crate::syntax::{
    AssignExpr, AstNode, Literal, MemberExpr, ObjectExpr, Property, SyntaxKind, SyntaxNode,
    SyntaxToken, token_for_offset,
};

use super::identity::resolve_identity;

/// The classified semantic role of a cursor position. Constructed fresh
/// per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// Nothing recognizable at the cursor, or an anti-match.
    NoMatch,
    /// Value of a `type:` property — completes component type names.
    TypeDiscriminator,
    /// Key position inside a `components` map — expects a fresh
    /// identifier. Carries the sibling keys already present.
    ComponentsCollection { existing: Vec<SmolStr> },
    /// Inside a `style`/`bodyStyle` value — completes the style table.
    Style,
    /// A property key or value slot backed by a schema bag.
    Property(PropertyTarget),
    /// Empty value slot of a boolean-typed entry.
    BooleanValue,
    /// Empty value slot of an entry with an enum indirection.
    EnumIndirection { component: SmolStr, table: SmolStr },
    /// After `this.` inside a method of a known component.
    ThisContext { component: SmolStr },
    /// A member access expecting a new, unique identifier.
    FreshIdentifier,
}

/// Which schema bag a [`ExprKind::Property`] slot draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyTarget {
    /// A namespace root's generic bag (no inheritance).
    Namespace(SmolStr),
    /// A component bag, gathered across the proto chain.
    Bag { component: SmolStr, bag: BagKind },
    /// A nested object below a bag entry (`properties: { editMode: { … } }`).
    Nested {
        component: SmolStr,
        bag_key: SmolStr,
        entry: SmolStr,
    },
}

/// Three-valued outcome of one classification attempt.
enum Step {
    Found(ExprKind),
    Continue,
    Reject,
}

/// Classify the cursor position in `doc` at `offset` (original-text
/// offsets; data-dialect compensation happens here).
pub fn classify(
    doc: &Document,
    offset: TextSize,
    schema: &SchemaRegistry,
    graph: &mut DocumentGraph,
) -> ExprKind {
    let root = doc.syntax();
    let tree_offset = offset + doc.prefix_len();
    let Some(token) = token_for_offset(&root, tree_offset) else {
        return ExprKind::NoMatch;
    };

    match member_access(&token, doc, graph) {
        Step::Found(kind) => return kind,
        Step::Reject => return ExprKind::NoMatch,
        Step::Continue => {}
    }
    match discriminator_literal(&token, doc, graph) {
        Step::Found(kind) => return kind,
        Step::Reject => return ExprKind::NoMatch,
        Step::Continue => {}
    }
    match property_value(&token, schema, doc, graph) {
        Step::Found(kind) => return kind,
        Step::Reject => return ExprKind::NoMatch,
        Step::Continue => {}
    }
    match parent_object(&token, doc, graph) {
        Step::Found(kind) => return kind,
        Step::Reject => return ExprKind::NoMatch,
        Step::Continue => {}
    }
    ExprKind::NoMatch
}

fn member_access(token: &SyntaxToken, doc: &Document, graph: &mut DocumentGraph) -> Step {
    let Some(member) = token.parent_ancestors().find_map(MemberExpr::cast) else {
        return Step::Continue;
    };

    if let Some(object) = member.object() {
        if object.kind() == SyntaxKind::THIS_EXPR {
            let in_function = member
                .syntax()
                .ancestors()
                .any(|n| n.kind() == SyntaxKind::FUNCTION_EXPR);
            if in_function {
                if let Some(component) = enclosing_component(member.syntax(), doc, graph) {
                    return Step::Found(ExprKind::ThisContext { component });
                }
            }
            return Step::Reject;
        }
        if let Some(accessed) = MemberExpr::cast(object).and_then(|inner| inner.name()) {
            if NAMESPACE_ROOTS.contains(&accessed.as_str()) {
                return Step::Found(ExprKind::FreshIdentifier);
            }
        }
    }
    trace!("[CLASSIFY] member expression outside the definition roots");
    Step::Reject
}

/// The component a method body belongs to: walk outward over the
/// enclosing object literals (bounded) and take the first resolvable
/// identity.
fn enclosing_component(
    node: &SyntaxNode,
    doc: &Document,
    graph: &mut DocumentGraph,
) -> Option<SmolStr> {
    node.ancestors()
        .filter_map(ObjectExpr::cast)
        .take(MAX_THIS_CONTEXT_DEPTH)
        .find_map(|obj| resolve_identity(&obj, doc, graph))
}

fn discriminator_literal(token: &SyntaxToken, doc: &Document, graph: &mut DocumentGraph) -> Step {
    let Some(lit) = token.parent().and_then(Literal::cast) else {
        return Step::Continue;
    };
    let Some(prop) = lit.syntax().parent().and_then(Property::cast) else {
        return Step::Continue;
    };
    // Keys are bare tokens; only a literal in value position counts.
    if prop.value().as_ref() != Some(lit.syntax()) {
        return Step::Continue;
    }
    dispatch_property(&prop, doc, graph)
}

fn property_value(
    token: &SyntaxToken,
    schema: &SchemaRegistry,
    doc: &Document,
    graph: &mut DocumentGraph,
) -> Step {
    // The innermost node must be the property itself: its colon or the
    // empty space where its value would go. On the key token the user is
    // still typing the key; that belongs to the parent-object check.
    let Some(prop) = token.parent().and_then(Property::cast) else {
        return Step::Continue;
    };
    if prop.key_token().as_ref() == Some(token) {
        return Step::Continue;
    }
    let Some(obj) = prop.object() else { return Step::Continue };
    let Some(bag_prop) = obj.parent_property() else { return Step::Continue };
    let Some(owner) = bag_prop.object() else { return Step::Continue };
    let Some(component) = resolve_identity(&owner, doc, graph) else {
        return Step::Continue;
    };
    let (Some(bag_key), Some(entry_key)) = (bag_prop.key_name(), prop.key_name()) else {
        return Step::Continue;
    };
    let Some(entry) = schema.lookup_entry(&component, &bag_key, &entry_key) else {
        return Step::Continue;
    };

    if entry.is_bool() {
        return Step::Found(ExprKind::BooleanValue);
    }
    if let Some(path) = &entry.data_ref {
        if let Some((component, table)) = schema.resolve_data_ref(path) {
            return Step::Found(ExprKind::EnumIndirection { component, table });
        }
    }
    Step::Continue
}

fn parent_object(token: &SyntaxToken, doc: &Document, graph: &mut DocumentGraph) -> Step {
    let Some(obj) = token.parent_ancestors().find_map(ObjectExpr::cast) else {
        return Step::Continue;
    };
    let Some(parent) = obj.syntax().parent() else { return Step::Continue };

    match parent.kind() {
        SyntaxKind::ASSIGN_EXPR => {
            let Some(path) = AssignExpr::cast(parent).and_then(|a| a.target_path()) else {
                return Step::Continue;
            };
            // `_DP.Definition.<Root>.<name> = { … }`
            if path.len() == 4 && path[0] == DEFINITION_OBJECT && path[1] == DEFINITION_MEMBER {
                return Step::Found(ExprKind::Property(PropertyTarget::Namespace(
                    path[2].clone(),
                )));
            }
            Step::Continue
        }
        SyntaxKind::PROPERTY => match Property::cast(parent) {
            Some(prop) => dispatch_property(&prop, doc, graph),
            None => Step::Continue,
        },
        _ => Step::Continue,
    }
}

/// Shared dispatch for "the cursor belongs to this property" (from the
/// literal-value check and the parent-object check).
fn dispatch_property(prop: &Property, doc: &Document, graph: &mut DocumentGraph) -> Step {
    let Some(key) = prop.key_name() else { return Step::Continue };

    match key.as_str() {
        KEY_TYPE => Step::Found(ExprKind::TypeDiscriminator),
        KEY_COMPONENTS => {
            let existing = prop
                .value()
                .and_then(ObjectExpr::cast)
                .map(|o| o.keys().collect())
                .unwrap_or_default();
            Step::Found(ExprKind::ComponentsCollection { existing })
        }
        KEY_STYLE | KEY_BODY_STYLE => Step::Found(ExprKind::Style),
        _ => {
            let Some(obj) = prop.object() else { return Step::Continue };

            // A fresh component entry inside a `components` map completes
            // the generic root bag.
            let under_components = obj
                .parent_property()
                .and_then(|p| p.key_name())
                .as_deref()
                == Some(KEY_COMPONENTS);
            if under_components {
                return Step::Found(ExprKind::Property(PropertyTarget::Namespace(
                    SmolStr::new(ROOT_LIBRARY),
                )));
            }

            if let Some(component) = resolve_identity(&obj, doc, graph) {
                return match BagKind::for_key(&key) {
                    Some(bag) => {
                        Step::Found(ExprKind::Property(PropertyTarget::Bag { component, bag }))
                    }
                    // Recognized the property, but its key names no
                    // completable bag.
                    None => Step::Found(ExprKind::NoMatch),
                };
            }

            if prop.value().map(|v| v.kind()) == Some(SyntaxKind::OBJECT_EXPR) {
                // Nested object below a bag entry: the schema path runs
                // through the grandparent bag property.
                if let Some(bag_prop) = obj.parent_property() {
                    if let (Some(owner), Some(bag_key)) = (bag_prop.object(), bag_prop.key_name())
                    {
                        if let Some(component) = resolve_identity(&owner, doc, graph) {
                            return Step::Found(ExprKind::Property(PropertyTarget::Nested {
                                component,
                                bag_key,
                                entry: key,
                            }));
                        }
                    }
                }
                return Step::Found(ExprKind::Property(PropertyTarget::Namespace(
                    SmolStr::new(ROOT_LIBRARY),
                )));
            }

            Step::Found(ExprKind::NoMatch)
        }
    }
}
