//! IDE features — the completion engine proper.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: classification and generation take data in and
//!    return data out; context travels as parameters, never ambient state
//! 2. **No editor-protocol types**: results use our own types, converted
//!    at the protocol boundary by the host
//! 3. **Degrade, don't fail**: every miss yields an empty or partial set
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use dashdef::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new(schema);
//! host.set_file_content("dashboard.js", "x = { type: 'Button' };");
//!
//! let set = host.resolve("dashboard.js", offset);
//! ```

mod analysis;
mod classify;
mod completion;
mod identity;

pub use analysis::AnalysisHost;
pub use classify::{ExprKind, PropertyTarget, classify};
pub use completion::{CompletionItem, CompletionSet, completions};
pub use identity::resolve_identity;
