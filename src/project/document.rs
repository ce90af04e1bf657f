//! A registered document: text, dialect, tree, imports.

use rowan::GreenNode;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::constants::DATA_PREFIX;
use crate::base::Dialect;
use crate::parser::{self, ParseError};
use crate::syntax::SyntaxNode;

use super::imports::parse_imports;

/// One document of the project, immutable for the duration of a
/// resolution call. Re-registering under the same name replaces it.
///
/// Data-dialect documents are parsed with [`DATA_PREFIX`] prepended so the
/// bare literal becomes a valid assignment statement; `text` stays the
/// original and all tree offsets are shifted by [`Document::prefix_len`].
#[derive(Debug)]
pub struct Document {
    name: SmolStr,
    text: String,
    dialect: Dialect,
    green: GreenNode,
    imports: Vec<SmolStr>,
    errors: Vec<ParseError>,
}

impl Document {
    pub fn parse(name: &str, text: String, dialect: Dialect) -> Document {
        let imports = parse_imports(&text);
        let parsed = match dialect {
            Dialect::Source => parser::parse(&text),
            Dialect::Data => parser::parse(&format!("{DATA_PREFIX}{text}")),
        };
        let prefix = dialect.prefix_len();
        let errors = parsed
            .errors
            .into_iter()
            .map(|e| ParseError::new(e.message, uncompensated(e.range, prefix)))
            .collect();
        Document {
            name: SmolStr::new(name),
            text,
            dialect,
            green: parsed.green,
            imports,
            errors,
        }
    }

    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Files referenced by this document's `//@import` comments, in order.
    pub fn imports(&self) -> &[SmolStr] {
        &self.imports
    }

    /// Parse errors, with ranges in original (uncompensated) offsets.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Root of the syntax tree. Offsets inside the tree are shifted by
    /// [`Self::prefix_len`] for data-dialect documents.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Length of the synthetic prefix the tree was parsed with.
    pub fn prefix_len(&self) -> TextSize {
        self.dialect.prefix_len()
    }
}

/// Shift a tree range back into original-text offsets.
fn uncompensated(range: TextRange, prefix: TextSize) -> TextRange {
    let start = u32::from(range.start()).saturating_sub(u32::from(prefix));
    let end = u32::from(range.end()).saturating_sub(u32::from(prefix));
    TextRange::new(TextSize::new(start), TextSize::new(end))
}
