//! Style records consumed by the writers.
//!
//! A [`Style`] is what the document model hands over for serialization. Only
//! paragraph styles carry formatting here; the other families are kept as
//! named placeholders so a stylesheet can hold them side by side.

mod alignment;
mod paragraph;

pub use alignment::Alignment;
pub use paragraph::{Indentation, ParagraphStyle};

use serde::Deserialize;

/// Style family types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Paragraph styles
    Paragraph,
    /// Text/character styles
    Text,
    /// Table styles
    Table,
}

impl StyleFamily {
    /// Convert to the `style:family` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Text => "text",
            Self::Table => "table",
        }
    }
}

/// A style of a family that has no writer, identified by name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedStyle {
    pub name: String,
    #[serde(default)]
    pub auto: bool,
}

impl NamedStyle {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            auto: false,
        }
    }
}

/// Any style record, tagged by family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Style {
    Paragraph(ParagraphStyle),
    Text(NamedStyle),
    Table(NamedStyle),
}

impl Style {
    pub fn name(&self) -> &str {
        match self {
            Self::Paragraph(p) => &p.name,
            Self::Text(s) | Self::Table(s) => &s.name,
        }
    }

    pub fn family(&self) -> StyleFamily {
        match self {
            Self::Paragraph(_) => StyleFamily::Paragraph,
            Self::Text(_) => StyleFamily::Text,
            Self::Table(_) => StyleFamily::Table,
        }
    }

    pub fn is_auto(&self) -> bool {
        match self {
            Self::Paragraph(p) => p.auto,
            Self::Text(s) | Self::Table(s) => s.auto,
        }
    }

    /// The paragraph record, if this is a paragraph style.
    #[inline]
    pub fn as_paragraph(&self) -> Option<&ParagraphStyle> {
        match self {
            Self::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}

impl From<ParagraphStyle> for Style {
    fn from(style: ParagraphStyle) -> Self {
        Self::Paragraph(style)
    }
}
