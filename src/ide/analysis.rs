//! AnalysisHost — unified state management for completion requests.
//!
//! The host owns the schema registry and the document graph and exposes
//! the single inbound operation, [`AnalysisHost::resolve`]. One resolution
//! call runs to completion before another begins; the registry is
//! read-only throughout and nothing is cached across calls.

use std::path::PathBuf;
use std::sync::Arc;

use text_size::{TextRange, TextSize};

use crate::base::Dialect;
use crate::parser::ParseError;
use crate::project::{DocumentGraph, FileProvider};
use crate::schema::SchemaRegistry;

use super::classify::classify;
use super::completion::{CompletionSet, completions};

/// Owns all state for the completion engine.
///
/// Register documents via [`set_file_content`](Self::set_file_content),
/// then ask for completions via [`resolve`](Self::resolve).
pub struct AnalysisHost {
    schema: Arc<SchemaRegistry>,
    graph: DocumentGraph,
}

impl AnalysisHost {
    /// A host over registered documents only (no lazy file loading).
    pub fn new(schema: SchemaRegistry) -> Self {
        Self {
            schema: Arc::new(schema),
            graph: DocumentGraph::new(),
        }
    }

    /// A host that loads imported documents through `provider`, resolving
    /// relative names against `project_root`.
    pub fn with_provider(
        schema: SchemaRegistry,
        project_root: impl Into<PathBuf>,
        provider: Box<dyn FileProvider>,
    ) -> Self {
        Self {
            schema: Arc::new(schema),
            graph: DocumentGraph::with_provider(project_root, provider),
        }
    }

    /// Register a document, inferring the dialect from its name.
    /// Returns parse errors; the tolerant parser stores a tree regardless.
    pub fn set_file_content(&mut self, name: &str, text: &str) -> Vec<ParseError> {
        self.graph.insert(name, text.to_string())
    }

    /// Register a document with an explicit dialect flag.
    pub fn set_file_content_with_dialect(
        &mut self,
        name: &str,
        text: &str,
        dialect: Dialect,
    ) -> Vec<ParseError> {
        self.graph.insert_with_dialect(name, text.to_string(), dialect)
    }

    /// Remove a document from the graph.
    pub fn remove_file(&mut self, name: &str) {
        self.graph.remove(name);
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    pub fn graph(&self) -> &DocumentGraph {
        &self.graph
    }

    /// Resolve completions for `name` at `offset` (byte offset into the
    /// document's original text).
    ///
    /// Never panics for syntactically valid input: an unknown document, an
    /// unrecognizable cursor position, or an unresolvable identity all
    /// degrade to an empty set.
    pub fn resolve(&mut self, name: &str, offset: TextSize) -> CompletionSet {
        let Some(doc) = self.graph.document(name) else {
            return CompletionSet::empty(offset);
        };

        let text = doc.text();
        let end = usize::from(offset).min(text.len());
        let end = floor_char_boundary(text, end);
        let start = word_start(text, end);
        let prefix = &text[start..end];

        let kind = classify(&doc, TextSize::new(end as u32), &self.schema, &mut self.graph);
        let items = completions(&self.schema, &kind, prefix, doc.dialect());

        CompletionSet {
            range: TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32)),
            items,
        }
    }
}

/// Scan back from `end` over identifier characters to the start of the
/// word being typed.
fn word_start(text: &str, end: usize) -> usize {
    let mut start = end;
    while start > 0 {
        let Some(ch) = text[..start].chars().next_back() else { break };
        if !is_ident_char(ch) {
            break;
        }
        start -= ch.len_utf8();
    }
    start
}

fn is_ident_char(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_ascii_digit() || unicode_ident::is_xid_continue(ch)
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ComponentDefinition, PropertyEntry, SchemaBuilder};

    fn host() -> AnalysisHost {
        let schema = SchemaBuilder::new()
            .component(
                "Button",
                ComponentDefinition::new().property("label", PropertyEntry::typed("string")),
            )
            .build();
        AnalysisHost::new(schema)
    }

    #[test]
    fn test_unknown_document_yields_empty_set() {
        let mut host = host();
        let set = host.resolve("missing.js", TextSize::new(0));
        assert!(set.items.is_empty());
    }

    #[test]
    fn test_word_range_spans_typed_prefix() {
        let mut host = host();
        let text = "x = { type: 'Bu' };";
        host.set_file_content("a.js", text);
        // inside the string, after "Bu"
        let offset = TextSize::new(text.find("Bu'").unwrap() as u32 + 2);
        let set = host.resolve("a.js", offset);
        assert_eq!(usize::from(set.range.len()), 2);
        assert_eq!(set.items.len(), 1);
        assert_eq!(set.items[0].display, "Button");
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let mut host = host();
        host.set_file_content("a.js", "x = {};");
        let set = host.resolve("a.js", TextSize::new(10_000));
        assert!(set.items.is_empty());
    }

    #[test]
    fn test_word_start_scans_identifier_chars() {
        assert_eq!(word_start("foo.bar", 7), 4);
        assert_eq!(word_start("  abc", 5), 2);
        assert_eq!(word_start("a b", 1), 0);
        assert_eq!(word_start("'Bu", 3), 1);
    }
}
