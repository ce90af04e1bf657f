//! Document dialect flag.

use text_size::TextSize;

use super::constants::DATA_PREFIX;

/// How a document's text is to be parsed.
///
/// `Source` documents are executable definition scripts (assignments,
/// function expressions). `Data` documents are pure nested literals
/// (JSON-style); they are parsed with a synthetic assignment prefix so the
/// literal becomes a valid expression statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Source,
    Data,
}

impl Dialect {
    /// Infer the dialect from a file name when the host does not state one.
    pub fn infer(name: &str) -> Dialect {
        match name.rsplit('.').next() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Dialect::Data,
            _ => Dialect::Source,
        }
    }

    /// Length of the synthetic prefix prepended before parsing.
    pub fn prefix_len(self) -> TextSize {
        match self {
            Dialect::Source => TextSize::new(0),
            Dialect::Data => TextSize::of(DATA_PREFIX),
        }
    }
}
