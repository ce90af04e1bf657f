//! The file-name-keyed document map with lazy import loading.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::Dialect;
use crate::parser::ParseError;

use super::document::Document;

/// Reads referenced files for lazy import loading.
pub trait FileProvider {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Provider backed by the file system.
#[derive(Debug, Default)]
pub struct FsProvider;

impl FileProvider for FsProvider {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// All documents of one analysis session, keyed by the name they were
/// registered or referenced under.
///
/// Registration is the host's responsibility; documents referenced through
/// `//@import` comments load lazily through the provider. A referenced
/// document that cannot be read simply stays absent — the scan that needed
/// it contributes no match.
pub struct DocumentGraph {
    project_root: PathBuf,
    provider: Option<Box<dyn FileProvider>>,
    documents: FxHashMap<SmolStr, Arc<Document>>,
}

impl Default for DocumentGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentGraph {
    /// A graph without a provider: only registered documents resolve.
    pub fn new() -> Self {
        Self {
            project_root: PathBuf::new(),
            provider: None,
            documents: FxHashMap::default(),
        }
    }

    /// A graph that loads referenced files relative to `project_root`.
    pub fn with_provider(project_root: impl Into<PathBuf>, provider: Box<dyn FileProvider>) -> Self {
        Self {
            project_root: project_root.into(),
            provider: Some(provider),
            documents: FxHashMap::default(),
        }
    }

    /// Register a document, inferring the dialect from the file name.
    pub fn insert(&mut self, name: &str, text: String) -> Vec<ParseError> {
        self.insert_with_dialect(name, text, Dialect::infer(name))
    }

    /// Register a document with an explicit dialect. Returns parse errors;
    /// the document is stored regardless (the parser is tolerant).
    pub fn insert_with_dialect(
        &mut self,
        name: &str,
        text: String,
        dialect: Dialect,
    ) -> Vec<ParseError> {
        let doc = Document::parse(name, text, dialect);
        let errors = doc.errors().to_vec();
        self.documents.insert(SmolStr::new(name), Arc::new(doc));
        errors
    }

    pub fn remove(&mut self, name: &str) {
        self.documents.remove(name);
    }

    /// A registered document, without attempting a load.
    pub fn get(&self, name: &str) -> Option<Arc<Document>> {
        self.documents.get(name).cloned()
    }

    /// A document by name, loading it through the provider on first need.
    pub fn document(&mut self, name: &str) -> Option<Arc<Document>> {
        if let Some(doc) = self.documents.get(name) {
            return Some(doc.clone());
        }
        let provider = self.provider.as_ref()?;
        let path = self.resolve_path(name);
        match provider.read(&path) {
            Ok(text) => {
                debug!("[IMPORTS] loaded {} from {}", name, path.display());
                let doc = Arc::new(Document::parse(name, text, Dialect::infer(name)));
                self.documents.insert(SmolStr::new(name), doc.clone());
                Some(doc)
            }
            Err(err) => {
                debug!("[IMPORTS] could not load {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Resolve a referenced file name against the project root. Absolute
    /// paths and drive-letter paths pass through unchanged.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        if is_full_path(name) {
            PathBuf::from(name)
        } else {
            self.project_root.join(name)
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn is_full_path(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('/'), _) => true,
        (_, Some(':')) => true,
        _ => false,
    }
}
