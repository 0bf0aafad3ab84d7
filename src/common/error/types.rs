//! Unified error types for the style writer.
//!
//! The paragraph emitter itself never fails. Errors come from the XML sink
//! (misuse of the element/attribute protocol) and from stylesheet loading.
use thiserror::Error;

/// Main error type for style writing operations.
#[derive(Error, Debug)]
pub enum Error {
    /// XML sink misuse or formatting failure
    #[error("XML error: {0}")]
    Xml(String),

    /// Stylesheet definition could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for style writing operations.
pub type Result<T> = std::result::Result<T, Error>;
