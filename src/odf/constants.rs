//! ODF element names, attribute names and fixed values used by the style writers.
//!
//! # References
//!
//! - OpenDocument 1.2, part 1, §16 (styles) and §20 (formatting properties)
//! - ECMA-376 part 1, §17.18.44 `ST_Jc`

use super::style::Alignment;
use phf::{Map, phf_map};

// ============================================================================
// ELEMENTS
// ============================================================================

/// Container for common (named, user-visible) styles in styles.xml
pub const OFFICE_STYLES: &str = "office:styles";

/// Container for automatic styles in content.xml / styles.xml
pub const OFFICE_AUTOMATIC_STYLES: &str = "office:automatic-styles";

/// A single style definition
pub const STYLE_STYLE: &str = "style:style";

/// Paragraph formatting properties nested in a paragraph style
pub const STYLE_PARAGRAPH_PROPERTIES: &str = "style:paragraph-properties";

// ============================================================================
// ATTRIBUTES
// ============================================================================

pub const ATTR_STYLE_NAME: &str = "style:name";
pub const ATTR_STYLE_FAMILY: &str = "style:family";
pub const ATTR_PARENT_STYLE_NAME: &str = "style:parent-style-name";
pub const ATTR_MASTER_PAGE_NAME: &str = "style:master-page-name";
pub const ATTR_PAGE_NUMBER: &str = "style:page-number";

pub const ATTR_MARGIN_TOP: &str = "fo:margin-top";
pub const ATTR_MARGIN_BOTTOM: &str = "fo:margin-bottom";
pub const ATTR_MARGIN_LEFT: &str = "fo:margin-left";
pub const ATTR_MARGIN_RIGHT: &str = "fo:margin-right";
pub const ATTR_TEXT_INDENT: &str = "fo:text-indent";
pub const ATTR_TEXT_ALIGN: &str = "fo:text-align";
pub const ATTR_BREAK_BEFORE: &str = "fo:break-before";

// ============================================================================
// VALUES
// ============================================================================

/// Parent style and master page of every automatic paragraph style
pub const STANDARD_STYLE: &str = "Standard";

/// `style:page-number` value continuing the previous page numbering
pub const PAGE_NUMBER_AUTO: &str = "auto";

/// `fo:break-before` value forcing a page break
pub const BREAK_PAGE: &str = "page";

// ============================================================================
// PARAGRAPH JUSTIFICATION TOKENS
// ============================================================================

/// Word `ST_Jc` token to alignment (compile-time perfect hash map)
pub static JC_VALUES: Map<&'static str, Alignment> = phf_map! {
    "start" => Alignment::Start,
    "center" => Alignment::Center,
    "end" => Alignment::End,
    "both" => Alignment::Both,
    "mediumKashida" => Alignment::MediumKashida,
    "distribute" => Alignment::Distribute,
    "numTab" => Alignment::NumTab,
    "highKashida" => Alignment::HighKashida,
    "lowKashida" => Alignment::LowKashida,
    "thaiDistribute" => Alignment::ThaiDistribute,
    "left" => Alignment::Left,
    "right" => Alignment::Right,
    "justify" => Alignment::Justify,
};
