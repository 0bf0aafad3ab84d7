//! OpenDocument style writing.
//!
//! This module maps style records onto the `style:style` elements of an
//! OpenDocument Text document. Lengths are converted from twips to
//! centimetres, Word justification values to `fo:text-align` keywords.

/// ODF element names, attribute names and fixed values
pub mod constants;
/// Style records
pub mod style;
/// Style writers and containers
pub mod writer;

pub use style::{Alignment, Indentation, NamedStyle, ParagraphStyle, Style, StyleFamily};
pub use writer::{
    AttributeSet, ParagraphStyleWriter, StyleContainer, StyleElement, StyleSheet, StyleWriter,
};
