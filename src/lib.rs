//! # dashdef-base
//!
//! Core library for dashboard definition documents: parsing the nested
//! object-literal component trees, querying the component schema, and
//! resolving cursor-context completions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (context classification, identity, completion)
//!   ↓
//! project   → Document registry, `//@import` graph, lazy loading
//!   ↓
//! schema    → Component definitions, proto chains, enum tables, style table
//!   ↓
//! syntax    → SyntaxKind, rowan Language, typed AST wrappers, cursor helpers
//!   ↓
//! parser    → Logos lexer, tolerant recursive-descent parser
//!   ↓
//! base      → Primitives (dialect flag, domain constants, text offsets)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → schema → project → ide)
// ============================================================================

/// Foundation types: document dialect, domain constants, text offsets
pub mod base;

/// Parser: Logos lexer, tolerant recursive-descent parser
pub mod parser;

/// Syntax: SyntaxKind, rowan Language impl, typed AST layer
pub mod syntax;

/// Schema: component definitions, inheritance chains, style table
pub mod schema;

/// Project: document registry and the `//@import` graph
pub mod project;

/// IDE features: expression classification, component identity, completion
pub mod ide;

// Re-export foundation types
pub use base::{Dialect, TextRange, TextSize};
pub use ide::{AnalysisHost, CompletionItem, CompletionSet};
pub use parser::ParseError;
pub use project::{Document, DocumentGraph, FileProvider};
pub use schema::{ComponentDefinition, PropertyEntry, SchemaBuilder, SchemaRegistry};
