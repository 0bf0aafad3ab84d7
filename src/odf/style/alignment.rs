//! Paragraph justification and its mapping to `fo:text-align`.

use crate::common::{Error, Result};
use crate::odf::constants::JC_VALUES;
use std::fmt;
use std::str::FromStr;

/// Paragraph justification as carried by Word-derived style records.
///
/// The variants mirror the `ST_Jc` simple type. `Unspecified` stands for a
/// record that has an alignment slot but no concrete value in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Start,
    Center,
    End,
    Both,
    MediumKashida,
    Distribute,
    NumTab,
    HighKashida,
    LowKashida,
    ThaiDistribute,
    Left,
    Right,
    Justify,
    #[default]
    Unspecified,
}

impl Alignment {
    /// Every alignment value, `Unspecified` last.
    pub const ALL: [Alignment; 14] = [
        Self::Start,
        Self::Center,
        Self::End,
        Self::Both,
        Self::MediumKashida,
        Self::Distribute,
        Self::NumTab,
        Self::HighKashida,
        Self::LowKashida,
        Self::ThaiDistribute,
        Self::Left,
        Self::Right,
        Self::Justify,
        Self::Unspecified,
    ];

    /// Map to the ODF `fo:text-align` keyword.
    ///
    /// Total: anything that is not centred, right-aligned or justified
    /// falls back to `left`.
    ///
    /// # Examples
    ///
    /// ```
    /// use odt_styles::odf::Alignment;
    ///
    /// assert_eq!(Alignment::End.text_align(), "right");
    /// assert_eq!(Alignment::Distribute.text_align(), "justify");
    /// assert_eq!(Alignment::Unspecified.text_align(), "left");
    /// ```
    pub fn text_align(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::End
            | Self::MediumKashida
            | Self::HighKashida
            | Self::LowKashida
            | Self::Right => "right",
            Self::Both | Self::Distribute | Self::ThaiDistribute | Self::Justify => "justify",
            _ => "left",
        }
    }

    /// The `ST_Jc` token for this value, `None` for `Unspecified`.
    pub fn as_jc(&self) -> Option<&'static str> {
        let token = match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Both => "both",
            Self::MediumKashida => "mediumKashida",
            Self::Distribute => "distribute",
            Self::NumTab => "numTab",
            Self::HighKashida => "highKashida",
            Self::LowKashida => "lowKashida",
            Self::ThaiDistribute => "thaiDistribute",
            Self::Left => "left",
            Self::Right => "right",
            Self::Justify => "justify",
            Self::Unspecified => return None,
        };
        Some(token)
    }

    /// Look up an `ST_Jc` token. Matching is case-sensitive.
    #[inline]
    pub fn from_jc(token: &str) -> Option<Self> {
        JC_VALUES.get(token).copied()
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_jc(s).ok_or_else(|| Error::Other(format!("Unknown alignment '{}'", s)))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_jc().unwrap_or("unspecified"))
    }
}

/// Serde glue: alignment is read from its `ST_Jc` token, and an empty or
/// missing token means "no alignment".
pub(crate) mod jc_serde {
    use super::Alignment;
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Alignment>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(token) if token.is_empty() => Ok(None),
            Some(token) => Alignment::from_jc(&token)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unknown alignment '{}'", token))),
        }
    }
}
