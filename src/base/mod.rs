//! Foundation types for the dashdef toolchain.
//!
//! This module provides fundamental types used throughout the library:
//! - [`Dialect`] - Document dialect flag (executable source vs. pure data)
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Domain constants (property keys, namespace roots, synthetic prefix)
//!
//! This module has NO dependencies on other dashdef modules.

pub mod constants;
mod dialect;

pub use dialect::Dialect;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
