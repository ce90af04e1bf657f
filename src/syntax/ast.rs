//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Keys of object properties are bare tokens under the PROPERTY node; the
//! value is the property's first child node.

use smol_str::SmolStr;

use super::kind::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(ObjectExpr, OBJECT_EXPR);
ast_node!(Property, PROPERTY);
ast_node!(MemberExpr, MEMBER_EXPR);
ast_node!(AssignExpr, ASSIGN_EXPR);
ast_node!(Literal, LITERAL);
ast_node!(NameRef, NAME_REF);
ast_node!(ThisExpr, THIS_EXPR);
ast_node!(FunctionExpr, FUNCTION_EXPR);

impl ObjectExpr {
    /// The direct properties of this object literal, in source order.
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.0.children().filter_map(Property::cast)
    }

    /// The key names of the direct properties.
    pub fn keys(&self) -> impl Iterator<Item = SmolStr> + '_ {
        self.properties().filter_map(|p| p.key_name())
    }

    /// The property this object literal is the value of, if any.
    pub fn parent_property(&self) -> Option<Property> {
        self.0.parent().and_then(Property::cast)
    }
}

impl Property {
    /// The key token (identifier, string, or number).
    pub fn key_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_key())
    }

    /// The key name with string quotes stripped.
    pub fn key_name(&self) -> Option<SmolStr> {
        let token = self.key_token()?;
        Some(SmolStr::new(string_content(token.text())))
    }

    /// The value node, if the property has one.
    pub fn value(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    /// The value as a string literal, quotes stripped.
    pub fn string_value(&self) -> Option<SmolStr> {
        Literal::cast(self.value()?)?.string_value()
    }

    /// The object literal this property belongs to.
    pub fn object(&self) -> Option<ObjectExpr> {
        self.0.parent().and_then(ObjectExpr::cast)
    }
}

impl MemberExpr {
    /// The expression being accessed (left of the dot).
    pub fn object(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    /// The accessed name token (right of the dot).
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
    }

    /// The accessed name.
    pub fn name(&self) -> Option<SmolStr> {
        self.name_token().map(|t| SmolStr::new(t.text()))
    }
}

impl AssignExpr {
    /// The assignment target (left of `=`).
    pub fn lhs(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    /// The assigned value (right of `=`).
    pub fn rhs(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }

    /// The target as a flat dotted path, when it is a simple member chain.
    pub fn target_path(&self) -> Option<Vec<SmolStr>> {
        flat_path(&self.lhs()?)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
    }

    pub fn is_string(&self) -> bool {
        self.token().map(|t| t.kind() == SyntaxKind::STRING).unwrap_or(false)
    }

    /// The string content, quotes stripped. None for non-string literals.
    pub fn string_value(&self) -> Option<SmolStr> {
        let token = self.token()?;
        if token.kind() != SyntaxKind::STRING {
            return None;
        }
        Some(SmolStr::new(string_content(token.text())))
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
    }
}

/// Strip surrounding quotes from a string token's text. The closing quote
/// may be absent (tolerant lexing of a string being typed).
pub fn string_content(text: &str) -> &str {
    let mut content = text;
    if let Some(rest) = content.strip_prefix('\'').or_else(|| content.strip_prefix('"')) {
        content = rest;
        if let Some(rest) = content.strip_suffix('\'').or_else(|| content.strip_suffix('"')) {
            content = rest;
        }
    }
    content
}

/// Flatten a simple member chain (`a.b.c`) into its dotted names.
///
/// Returns None when the expression is anything other than identifiers
/// joined by dots.
pub fn flat_path(expr: &SyntaxNode) -> Option<Vec<SmolStr>> {
    match expr.kind() {
        SyntaxKind::NAME_REF => {
            let name = NameRef::cast(expr.clone())?.name()?;
            Some(vec![name])
        }
        SyntaxKind::MEMBER_EXPR => {
            let member = MemberExpr::cast(expr.clone())?;
            let mut path = flat_path(&member.object()?)?;
            path.push(member.name()?);
            Some(path)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first<N: AstNode>(input: &str) -> N {
        parse(input)
            .syntax()
            .descendants()
            .find_map(N::cast)
            .expect("node not found")
    }

    #[test]
    fn test_property_accessors() {
        let obj: ObjectExpr = first("{ type: 'Button', \"width\": 10 }");
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["type", "width"]);

        let prop = obj.properties().next().unwrap();
        assert_eq!(prop.string_value().unwrap(), "Button");
    }

    #[test]
    fn test_member_chain_path() {
        let assign: AssignExpr = first("_DP.Definition.Library.page = {}");
        let path = assign.target_path().unwrap();
        assert_eq!(path, vec!["_DP", "Definition", "Library", "page"]);
    }

    #[test]
    fn test_member_name_missing_on_trailing_dot() {
        let members: Vec<MemberExpr> = parse("x.Library.")
            .syntax()
            .descendants()
            .filter_map(MemberExpr::cast)
            .collect();
        assert_eq!(members.len(), 2);
        // Preorder: the outermost (trailing-dot) member comes first.
        assert!(members[0].name().is_none());
        assert_eq!(members[1].name().unwrap(), "Library");
    }

    #[test]
    fn test_string_content_unterminated() {
        assert_eq!(string_content("'But"), "But");
        assert_eq!(string_content("\"Button\""), "Button");
        assert_eq!(string_content("plain"), "plain");
    }

    #[test]
    fn test_flat_path_rejects_calls() {
        let parse = parse("a().b = {}");
        let assign = parse.syntax().descendants().find_map(AssignExpr::cast).unwrap();
        assert!(assign.target_path().is_none());
    }
}
