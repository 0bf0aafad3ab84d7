//! Style writers: turn style records into `style:style` XML.
//!
//! Every style family gets one [`StyleWriter`]. A writer handed a style of
//! another family writes nothing and reports no error.

mod element;
mod paragraph;
mod stylesheet;

pub use element::{Attribute, AttributeSet, StyleElement};
pub use paragraph::ParagraphStyleWriter;
pub use stylesheet::{StyleContainer, StyleSheet};

use super::style::Style;
use crate::common::{Result, XmlWriter};

/// Serializes the styles of one family.
pub trait StyleWriter {
    /// Build the element for `style`, or `None` when the style belongs to
    /// another family.
    fn element(&self, style: &Style) -> Option<StyleElement>;

    /// Write the element for `style` to `xml`. No-op for other families.
    fn write(&self, style: &Style, xml: &mut XmlWriter) -> Result<()> {
        match self.element(style) {
            Some(element) => element.write_to(xml),
            None => Ok(()),
        }
    }
}
