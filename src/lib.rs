//! odt-styles - OpenDocument Text style writer
//!
//! This library turns paragraph style records, as produced by a word
//! processing document model, into the `style:style` elements of an
//! OpenDocument Text (.odt) document.
//!
//! # Features
//!
//! - **Paragraph styles**: spacing, alignment, page breaks and indentation
//!   mapped to `style:paragraph-properties`
//! - **Automatic styles**: linked to the `Standard` parent style and master page
//! - **Style containers**: `office:styles` and `office:automatic-styles`
//! - **YAML stylesheets** (feature `yaml`): load style definitions from text
//!
//! # Example
//!
//! ```
//! use odt_styles::common::WriterOptions;
//! use odt_styles::odf::{Alignment, Indentation, ParagraphStyle, StyleContainer, StyleSheet};
//!
//! # fn main() -> odt_styles::Result<()> {
//! let mut sheet = StyleSheet::new();
//! sheet.push(
//!     ParagraphStyle::new("Quote")
//!         .with_space_before(240.0)
//!         .with_alignment(Alignment::Both)
//!         .with_indentation(Indentation::new().with_left(720.0)),
//! );
//!
//! let xml = sheet.to_xml(StyleContainer::Common, &WriterOptions::new().with_indent(2))?;
//! assert!(xml.contains(r#"fo:text-align="justify""#));
//! assert!(xml.contains(r#"fo:margin-left="1.27cm""#));
//! # Ok(())
//! # }
//! ```

/// Common types shared by the writers: errors, units and the XML sink
pub mod common;

/// OpenDocument style records and writers
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use odf::{Alignment, ParagraphStyle, ParagraphStyleWriter, Style, StyleSheet, StyleWriter};
