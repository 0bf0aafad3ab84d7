//! Attribute sets produced by the style writers before serialization.

use crate::common::{Result, XmlWriter};
use crate::odf::constants::STYLE_STYLE;
use smallvec::SmallVec;

/// One `(name, value)` attribute pair.
pub type Attribute = (&'static str, String);

/// Ordered attribute list of a single XML element.
///
/// Insertion order is output order. Names are not deduplicated; the writers
/// never push the same name twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attrs: SmallVec<[Attribute; 8]>,
}

impl AttributeSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.attrs.push((name, value.into()));
    }

    /// Value of the first attribute called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Attribute names in output order.
    pub fn names(&self) -> Vec<&'static str> {
        self.attrs.iter().map(|(n, _)| *n).collect()
    }

    /// Write every attribute onto the element currently open in `xml`.
    pub fn write_to(&self, xml: &mut XmlWriter) -> Result<()> {
        for (name, value) in &self.attrs {
            xml.write_attribute(name, value)?;
        }
        Ok(())
    }
}

/// A `style:style` element with one nested properties element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    /// Attributes of `style:style`
    pub attributes: AttributeSet,
    /// Tag of the nested properties element
    pub properties_tag: &'static str,
    /// Attributes of the nested properties element
    pub properties: AttributeSet,
}

impl StyleElement {
    pub fn new(properties_tag: &'static str) -> Self {
        Self {
            attributes: AttributeSet::new(),
            properties_tag,
            properties: AttributeSet::new(),
        }
    }

    /// Serialize the element. The properties element is always written,
    /// even when it has no attributes.
    pub fn write_to(&self, xml: &mut XmlWriter) -> Result<()> {
        xml.start_element(STYLE_STYLE)?;
        self.attributes.write_to(xml)?;

        xml.start_element(self.properties_tag)?;
        self.properties.write_to(xml)?;
        xml.end_element()?;

        xml.end_element()
    }
}
