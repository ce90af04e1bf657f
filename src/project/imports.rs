//! Extraction of `//@import` declarations.

use smol_str::SmolStr;

/// Import comments start a line with this marker, followed by one file name.
const IMPORT_MARKER: &str = "//@import ";

/// Collect the file names referenced by leading `//@import` comments.
///
/// One declaration per line, anywhere in the document as long as the
/// comment starts its line. A marker with no file name after it is
/// skipped; well-formed entries are unaffected.
pub fn parse_imports(text: &str) -> Vec<SmolStr> {
    text.lines()
        .filter_map(|line| line.strip_prefix(IMPORT_MARKER))
        .filter_map(|rest| rest.split(' ').next())
        .filter(|name| !name.is_empty())
        .map(SmolStr::new)
        .collect()
}
