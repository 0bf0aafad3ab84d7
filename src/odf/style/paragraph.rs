//! Paragraph style records.

use super::alignment::{Alignment, jc_serde};
use serde::Deserialize;

/// Paragraph indentation, all lengths in twips.
///
/// A negative `first_line` is a hanging indent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Indentation {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub first_line: Option<f64>,
}

impl Indentation {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_left(mut self, twips: f64) -> Self {
        self.left = Some(twips);
        self
    }

    #[inline]
    pub fn with_right(mut self, twips: f64) -> Self {
        self.right = Some(twips);
        self
    }

    #[inline]
    pub fn with_first_line(mut self, twips: f64) -> Self {
        self.first_line = Some(twips);
        self
    }
}

/// A named paragraph style as handed over by the document model.
///
/// Lengths are in twips. `alignment == None` means the alignment slot is
/// empty and no `fo:text-align` is written; `Some(Alignment::Unspecified)`
/// still writes `left`.
///
/// # Examples
///
/// ```
/// use odt_styles::odf::{Alignment, Indentation, ParagraphStyle};
///
/// let style = ParagraphStyle::new("Quote")
///     .with_space_after(120.0)
///     .with_alignment(Alignment::Both)
///     .with_indentation(Indentation::new().with_left(720.0));
/// assert!(!style.auto);
/// assert_eq!(style.alignment, Some(Alignment::Both));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    pub name: String,
    pub auto: bool,
    pub space_before: Option<f64>,
    pub space_after: Option<f64>,
    #[serde(deserialize_with = "jc_serde::deserialize")]
    pub alignment: Option<Alignment>,
    pub page_break_before: bool,
    pub indentation: Option<Indentation>,
}

impl ParagraphStyle {
    /// Create a user (non-automatic) paragraph style.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Create an automatic paragraph style, linked to the `Standard` master page.
    pub fn automatic(name: &str) -> Self {
        Self {
            name: name.to_string(),
            auto: true,
            ..Self::default()
        }
    }

    pub fn with_space_before(mut self, twips: f64) -> Self {
        self.space_before = Some(twips);
        self
    }

    pub fn with_space_after(mut self, twips: f64) -> Self {
        self.space_after = Some(twips);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_page_break_before(mut self, page_break: bool) -> Self {
        self.page_break_before = page_break;
        self
    }

    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = Some(indentation);
        self
    }

    /// Set the alignment from an `ST_Jc` token.
    ///
    /// An empty token clears the alignment. Unknown tokens are rejected and
    /// leave the current value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use odt_styles::odf::{Alignment, ParagraphStyle};
    ///
    /// let mut style = ParagraphStyle::new("Body");
    /// assert!(style.set_alignment_value("center"));
    /// assert!(!style.set_alignment_value("middle"));
    /// assert_eq!(style.alignment, Some(Alignment::Center));
    /// assert!(style.set_alignment_value(""));
    /// assert_eq!(style.alignment, None);
    /// ```
    pub fn set_alignment_value(&mut self, token: &str) -> bool {
        if token.is_empty() {
            self.alignment = None;
            return true;
        }
        match Alignment::from_jc(token) {
            Some(alignment) => {
                self.alignment = Some(alignment);
                true
            },
            None => false,
        }
    }
}
