use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use odt_styles::common::xml::escape_xml;
/// assert_eq!(escape_xml("Heading & Body"), "Heading &amp; Body");
/// assert_eq!(escape_xml("<\"Quote\">"), "&lt;&quot;Quote&quot;&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Append `s` to `buf` with XML special characters escaped.
#[inline]
pub fn push_escaped(buf: &mut String, s: &str) {
    if XML_ESCAPER.is_match(s) {
        buf.push_str(&escape_xml(s));
    } else {
        buf.push_str(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml("a'b"), "a&apos;b");
        assert_eq!(escape_xml("&&"), "&amp;&amp;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_push_escaped() {
        let mut buf = String::from("name=");
        push_escaped(&mut buf, "Q&A");
        assert_eq!(buf, "name=Q&amp;A");
    }
}
