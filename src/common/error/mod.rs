//! Unified error types for the style writer.
//!
//! This module provides a single error type shared by the XML sink and the
//! stylesheet loader, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
