//! Common types, traits, and utilities shared by the style writers.
//!
//! This module provides the error type, length unit conversions and the
//! XML sink used by every writer in the crate.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use xml::{WriterOptions, XmlWriter};
