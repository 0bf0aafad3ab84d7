//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from foreign
//! error types to the unified Error type.

use super::types::Error;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
