//! Syntax tree definitions: kinds, rowan language, typed AST layer.

pub mod ast;
mod cursor;
mod kind;

pub use ast::{
    AssignExpr, AstNode, FunctionExpr, Literal, MemberExpr, NameRef, ObjectExpr, Property,
    ThisExpr, flat_path, string_content,
};
pub use cursor::token_for_offset;
pub use kind::{DashLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
