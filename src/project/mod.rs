//! Project management: the document registry and the `//@import` graph.
//!
//! Documents are registered by the host; documents referenced through
//! import comments are loaded lazily, on first need, through a pluggable
//! [`FileProvider`].

mod document;
mod graph;
mod imports;

pub use document::Document;
pub use graph::{DocumentGraph, FileProvider, FsProvider};
pub use imports::parse_imports;
