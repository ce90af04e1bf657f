//! Rowan-based parser for the object-literal definition dialect.
//!
//! This module provides a lossless, error-tolerant parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! The rust-analyzer approach: we build a lossless CST that preserves all
//! whitespace and comments, then layer typed AST accessors on top
//! (see [`crate::syntax`]).

mod lexer;
#[allow(clippy::module_inception)]
mod parser;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};

use text_size::TextRange;
use thiserror::Error;

/// A syntax error with location and message.
///
/// Collected during parsing; never raised. A completion request operates on
/// whatever tree the tolerant parser produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub range: TextRange,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}
