//! Paragraph style writer.

use super::{AttributeSet, StyleElement, StyleWriter};
use crate::common::unit::format_cm;
use crate::odf::constants::*;
use crate::odf::style::{ParagraphStyle, Style, StyleFamily};

/// Writes paragraph styles as `style:style` with nested
/// `style:paragraph-properties`.
///
/// Automatic styles are linked to the `Standard` parent style and master page
/// and carry no formatting. User styles get one attribute per field that is
/// set; zero lengths count as unset.
///
/// # Examples
///
/// ```
/// use odt_styles::common::XmlWriter;
/// use odt_styles::odf::{Alignment, ParagraphStyle, ParagraphStyleWriter, Style, StyleWriter};
///
/// # fn main() -> odt_styles::Result<()> {
/// let style = Style::from(
///     ParagraphStyle::new("Title")
///         .with_space_after(720.0)
///         .with_alignment(Alignment::Center),
/// );
///
/// let mut xml = XmlWriter::new();
/// ParagraphStyleWriter.write(&style, &mut xml)?;
/// assert_eq!(
///     xml.finish()?,
///     concat!(
///         r#"<style:style style:name="Title" style:family="paragraph">"#,
///         r#"<style:paragraph-properties fo:margin-bottom="1.27cm" fo:text-align="center"/>"#,
///         r#"</style:style>"#,
///     )
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphStyleWriter;

impl StyleWriter for ParagraphStyleWriter {
    fn element(&self, style: &Style) -> Option<StyleElement> {
        style.as_paragraph().map(paragraph_element)
    }
}

fn paragraph_element(style: &ParagraphStyle) -> StyleElement {
    let mut element = StyleElement::new(STYLE_PARAGRAPH_PROPERTIES);

    let attrs = &mut element.attributes;
    attrs.push(ATTR_STYLE_NAME, style.name.as_str());
    attrs.push(ATTR_STYLE_FAMILY, StyleFamily::Paragraph.as_str());

    if style.auto {
        attrs.push(ATTR_PARENT_STYLE_NAME, STANDARD_STYLE);
        attrs.push(ATTR_MASTER_PAGE_NAME, STANDARD_STYLE);
        element.properties.push(ATTR_PAGE_NUMBER, PAGE_NUMBER_AUTO);
        return element;
    }

    let props = &mut element.properties;

    // Spacing
    push_length(props, ATTR_MARGIN_TOP, style.space_before);
    push_length(props, ATTR_MARGIN_BOTTOM, style.space_after);

    if let Some(alignment) = style.alignment {
        props.push(ATTR_TEXT_ALIGN, alignment.text_align());
    }

    if style.page_break_before {
        props.push(ATTR_BREAK_BEFORE, BREAK_PAGE);
    }

    if let Some(indentation) = &style.indentation {
        push_length(props, ATTR_MARGIN_LEFT, indentation.left);
        push_length(props, ATTR_MARGIN_RIGHT, indentation.right);
        push_length(props, ATTR_TEXT_INDENT, indentation.first_line);
    }

    element
}

/// Push `name` as a centimetre length when `twips` is set and non-zero.
#[inline]
fn push_length(props: &mut AttributeSet, name: &'static str, twips: Option<f64>) {
    if let Some(twips) = twips.filter(|t| *t != 0.0) {
        props.push(name, format_cm(twips));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::XmlWriter;
    use crate::odf::style::{Alignment, Indentation, NamedStyle};

    fn element_of(style: ParagraphStyle) -> StyleElement {
        ParagraphStyleWriter
            .element(&Style::from(style))
            .expect("paragraph style produces an element")
    }

    #[test]
    fn test_non_paragraph_styles_write_nothing() {
        for style in [
            Style::Text(NamedStyle::new("Strong")),
            Style::Table(NamedStyle::new("Grid")),
        ] {
            assert!(ParagraphStyleWriter.element(&style).is_none());

            let mut xml = XmlWriter::new();
            ParagraphStyleWriter.write(&style, &mut xml).unwrap();
            assert_eq!(xml.finish().unwrap(), "");
        }
    }

    #[test]
    fn test_name_and_family_always_written() {
        let element = element_of(ParagraphStyle::new("Body"));
        assert_eq!(element.attributes.names(), vec![ATTR_STYLE_NAME, ATTR_STYLE_FAMILY]);
        assert_eq!(element.attributes.get(ATTR_STYLE_NAME), Some("Body"));
        assert_eq!(element.attributes.get(ATTR_STYLE_FAMILY), Some("paragraph"));
        assert_eq!(element.properties_tag, STYLE_PARAGRAPH_PROPERTIES);
        assert!(element.properties.is_empty());
    }

    #[test]
    fn test_automatic_style() {
        let element = element_of(ParagraphStyle::automatic("P1"));

        assert_eq!(element.attributes.get(ATTR_PARENT_STYLE_NAME), Some("Standard"));
        assert_eq!(element.attributes.get(ATTR_MASTER_PAGE_NAME), Some("Standard"));
        assert_eq!(element.properties.names(), vec![ATTR_PAGE_NUMBER]);
        assert_eq!(element.properties.get(ATTR_PAGE_NUMBER), Some("auto"));
    }

    #[test]
    fn test_automatic_style_ignores_formatting() {
        let style = ParagraphStyle::automatic("P2")
            .with_space_before(240.0)
            .with_space_after(240.0)
            .with_alignment(Alignment::Center)
            .with_page_break_before(true)
            .with_indentation(
                Indentation::new()
                    .with_left(720.0)
                    .with_right(720.0)
                    .with_first_line(360.0),
            );
        let element = element_of(style);
        assert_eq!(element.properties.names(), vec![ATTR_PAGE_NUMBER]);
    }

    #[test]
    fn test_user_style_has_no_master_page_link() {
        let element = element_of(ParagraphStyle::new("Body"));
        assert!(!element.attributes.contains(ATTR_PARENT_STYLE_NAME));
        assert!(!element.attributes.contains(ATTR_MASTER_PAGE_NAME));
        assert!(!element.properties.contains(ATTR_PAGE_NUMBER));
    }

    #[test]
    fn test_space_before() {
        let element = element_of(ParagraphStyle::new("Body").with_space_before(240.0));
        assert_eq!(
            element.properties.get(ATTR_MARGIN_TOP),
            Some(format_cm(240.0).as_str())
        );
        assert!(!element.properties.contains(ATTR_MARGIN_BOTTOM));

        let element = element_of(ParagraphStyle::new("Body"));
        assert!(!element.properties.contains(ATTR_MARGIN_TOP));
    }

    #[test]
    fn test_space_after() {
        let element = element_of(ParagraphStyle::new("Body").with_space_after(1440.0));
        assert_eq!(element.properties.get(ATTR_MARGIN_BOTTOM), Some("2.54cm"));
    }

    #[test]
    fn test_zero_lengths_are_unset() {
        let style = ParagraphStyle::new("Body")
            .with_space_before(0.0)
            .with_space_after(0.0)
            .with_indentation(Indentation::new().with_left(0.0).with_first_line(0.0));
        let element = element_of(style);
        assert!(element.properties.is_empty());
    }

    #[test]
    fn test_alignment_written_through_mapper() {
        let element = element_of(ParagraphStyle::new("Body").with_alignment(Alignment::Distribute));
        assert_eq!(element.properties.get(ATTR_TEXT_ALIGN), Some("justify"));

        let element = element_of(ParagraphStyle::new("Body").with_alignment(Alignment::Unspecified));
        assert_eq!(element.properties.get(ATTR_TEXT_ALIGN), Some("left"));
    }

    #[test]
    fn test_empty_alignment_suppressed() {
        let mut style = ParagraphStyle::new("Body").with_alignment(Alignment::Right);
        assert!(style.set_alignment_value(""));
        let element = element_of(style);
        assert!(!element.properties.contains(ATTR_TEXT_ALIGN));
    }

    #[test]
    fn test_page_break_before() {
        let element = element_of(ParagraphStyle::new("Chapter").with_page_break_before(true));
        assert_eq!(element.properties.get(ATTR_BREAK_BEFORE), Some("page"));

        let element = element_of(ParagraphStyle::new("Chapter").with_page_break_before(false));
        assert!(!element.properties.contains(ATTR_BREAK_BEFORE));
    }

    #[test]
    fn test_first_line_only_indentation() {
        let style = ParagraphStyle::new("Body")
            .with_indentation(Indentation::new().with_first_line(720.0));
        let element = element_of(style);

        assert_eq!(element.properties.get(ATTR_TEXT_INDENT), Some("1.27cm"));
        assert!(!element.properties.contains(ATTR_MARGIN_LEFT));
        assert!(!element.properties.contains(ATTR_MARGIN_RIGHT));
    }

    #[test]
    fn test_hanging_indent_is_negative() {
        let style = ParagraphStyle::new("List")
            .with_indentation(Indentation::new().with_left(1440.0).with_first_line(-720.0));
        let element = element_of(style);
        assert_eq!(element.properties.get(ATTR_MARGIN_LEFT), Some("2.54cm"));
        assert_eq!(element.properties.get(ATTR_TEXT_INDENT), Some("-1.27cm"));
    }

    #[test]
    fn test_attribute_order() {
        let style = ParagraphStyle::new("Full")
            .with_space_before(120.0)
            .with_space_after(120.0)
            .with_alignment(Alignment::Center)
            .with_page_break_before(true)
            .with_indentation(
                Indentation::new()
                    .with_left(720.0)
                    .with_right(720.0)
                    .with_first_line(360.0),
            );
        let element = element_of(style);
        assert_eq!(
            element.properties.names(),
            vec![
                ATTR_MARGIN_TOP,
                ATTR_MARGIN_BOTTOM,
                ATTR_TEXT_ALIGN,
                ATTR_BREAK_BEFORE,
                ATTR_MARGIN_LEFT,
                ATTR_MARGIN_RIGHT,
                ATTR_TEXT_INDENT,
            ]
        );
    }

    #[test]
    fn test_write_automatic_xml() {
        let mut xml = XmlWriter::new();
        ParagraphStyleWriter
            .write(&ParagraphStyle::automatic("P1").into(), &mut xml)
            .unwrap();
        assert_eq!(
            xml.finish().unwrap(),
            concat!(
                r#"<style:style style:name="P1" style:family="paragraph" "#,
                r#"style:parent-style-name="Standard" style:master-page-name="Standard">"#,
                r#"<style:paragraph-properties style:page-number="auto"/>"#,
                r#"</style:style>"#,
            )
        );
    }

    #[test]
    fn test_style_name_escaped() {
        let mut xml = XmlWriter::new();
        ParagraphStyleWriter
            .write(&ParagraphStyle::new("Q&A").into(), &mut xml)
            .unwrap();
        assert!(xml.finish().unwrap().contains(r#"style:name="Q&amp;A""#));
    }

    mod property_tests {
        use super::*;
        use proptest::option;
        use proptest::prelude::*;

        fn length_strategy() -> impl Strategy<Value = Option<f64>> {
            option::of(-20_000.0f64..20_000.0)
        }

        fn alignment_strategy() -> impl Strategy<Value = Option<Alignment>> {
            option::of((0..Alignment::ALL.len()).prop_map(|i| Alignment::ALL[i]))
        }

        prop_compose! {
            fn paragraph_style_strategy()(
                auto in any::<bool>(),
                space_before in length_strategy(),
                space_after in length_strategy(),
                alignment in alignment_strategy(),
                page_break_before in any::<bool>(),
                left in length_strategy(),
                right in length_strategy(),
                first_line in length_strategy(),
                has_indentation in any::<bool>(),
            ) -> ParagraphStyle {
                ParagraphStyle {
                    name: "Generated".to_string(),
                    auto,
                    space_before,
                    space_after,
                    alignment,
                    page_break_before,
                    indentation: has_indentation.then_some(Indentation { left, right, first_line }),
                }
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_automatic_styles_carry_only_page_number(style in paragraph_style_strategy()) {
                prop_assume!(style.auto);
                let element = element_of(style);
                prop_assert_eq!(element.properties.names(), vec![ATTR_PAGE_NUMBER]);
                prop_assert_eq!(element.attributes.get(ATTR_PARENT_STYLE_NAME), Some("Standard"));
                prop_assert_eq!(element.attributes.get(ATTR_MASTER_PAGE_NAME), Some("Standard"));
            }

            #[test]
            fn prop_attribute_present_iff_field_set(style in paragraph_style_strategy()) {
                prop_assume!(!style.auto);
                let set = |v: Option<f64>| v.is_some_and(|t| t != 0.0);
                let indentation = style.indentation.unwrap_or_default();
                let element = element_of(style.clone());
                let props = &element.properties;

                prop_assert_eq!(props.contains(ATTR_MARGIN_TOP), set(style.space_before));
                prop_assert_eq!(props.contains(ATTR_MARGIN_BOTTOM), set(style.space_after));
                prop_assert_eq!(props.contains(ATTR_TEXT_ALIGN), style.alignment.is_some());
                prop_assert_eq!(props.contains(ATTR_BREAK_BEFORE), style.page_break_before);
                prop_assert_eq!(props.contains(ATTR_MARGIN_LEFT), set(indentation.left));
                prop_assert_eq!(props.contains(ATTR_MARGIN_RIGHT), set(indentation.right));
                prop_assert_eq!(props.contains(ATTR_TEXT_INDENT), set(indentation.first_line));

                for (_, value) in props.iter() {
                    prop_assert!(!value.is_empty());
                }
            }
        }
    }
}
