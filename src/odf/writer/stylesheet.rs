//! Style containers: `office:styles` and `office:automatic-styles`.
//!
//! Automatic paragraph styles go to the automatic container, user styles to
//! the common one. A document serialization pass writes both from the same
//! [`StyleSheet`].

use super::{ParagraphStyleWriter, StyleWriter};
use crate::common::{Result, WriterOptions, XmlWriter};
use crate::odf::constants::{OFFICE_AUTOMATIC_STYLES, OFFICE_STYLES};
use crate::odf::style::{Style, StyleFamily};
use serde::Deserialize;
use std::fmt;

/// Which style container to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleContainer {
    /// `office:styles`, holding non-automatic styles
    Common,
    /// `office:automatic-styles`, holding automatic styles
    Automatic,
}

impl StyleContainer {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Common => OFFICE_STYLES,
            Self::Automatic => OFFICE_AUTOMATIC_STYLES,
        }
    }

    #[inline]
    fn holds(&self, style: &Style) -> bool {
        style.is_auto() == (*self == Self::Automatic)
    }
}

impl fmt::Display for StyleContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ordered collection of styles.
///
/// # Examples
///
/// ```
/// use odt_styles::common::WriterOptions;
/// use odt_styles::odf::{ParagraphStyle, StyleContainer, StyleSheet};
///
/// # fn main() -> odt_styles::Result<()> {
/// let mut sheet = StyleSheet::new();
/// sheet.push(ParagraphStyle::new("Body"));
/// sheet.push(ParagraphStyle::automatic("P1"));
///
/// let xml = sheet.to_xml(StyleContainer::Common, &WriterOptions::new())?;
/// assert!(xml.contains(r#"style:name="Body""#));
/// assert!(!xml.contains(r#"style:name="P1""#));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    styles: Vec<Style>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stylesheet from a YAML definition.
    ///
    /// ```yaml
    /// styles:
    ///   - family: paragraph
    ///     name: Heading
    ///     space_before: 240
    ///     alignment: center
    ///   - family: paragraph
    ///     name: P1
    ///     auto: true
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the YAML is
    /// malformed or names an unknown family or alignment.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_saphyr::from_str(text).map_err(|e| {
            crate::common::Error::Config(format!("Failed to parse stylesheet YAML: {}", e))
        })
    }

    pub fn push(&mut self, style: impl Into<Style>) {
        self.styles.push(style.into());
    }

    #[inline]
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Write `container` with every style that belongs in it.
    pub fn write(&self, container: StyleContainer, xml: &mut XmlWriter) -> Result<()> {
        xml.start_element(container.tag())?;

        let mut written = 0usize;
        for style in self.styles.iter().filter(|s| container.holds(s)) {
            match style.family() {
                StyleFamily::Paragraph => {
                    ParagraphStyleWriter.write(style, xml)?;
                    written += 1;
                },
                family => {
                    log::trace!(
                        "skipping {} style '{}': no writer for family",
                        family.as_str(),
                        style.name()
                    );
                },
            }
        }

        log::debug!("wrote {} styles to {}", written, container);
        xml.end_element()
    }

    /// Write `container` into a fresh string.
    pub fn to_xml(&self, container: StyleContainer, options: &WriterOptions) -> Result<String> {
        let mut xml = XmlWriter::with_options(options.clone());
        self.write(container, &mut xml)?;
        xml.finish()
    }
}

impl FromIterator<Style> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}
