//! Streaming XML writer used as the output sink of the style writers.
//!
//! The writer only knows elements and attributes. Attributes may be written
//! while the start tag of the innermost element is still open; the tag is
//! closed implicitly when a child element starts or collapsed to `<x/>` when
//! the element ends without content.

use super::escape::push_escaped;
use crate::common::{Error, Result};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Output options for [`XmlWriter`].
///
/// # Examples
///
/// ```rust
/// use odt_styles::common::WriterOptions;
///
/// let options = WriterOptions::new().with_indent(2).with_declaration(true);
/// assert_eq!(options.indent, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces per nesting level, or `None` for compact output
    pub indent: Option<usize>,
    /// Whether to emit the `<?xml ...?>` declaration
    pub declaration: bool,
}

impl WriterOptions {
    /// Create options with default values (compact, no declaration).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent nested elements by `width` spaces per level.
    #[inline]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    /// Set whether the XML declaration is written first.
    #[inline]
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    has_children: bool,
}

/// String-backed XML writer.
///
/// # Examples
///
/// ```rust
/// use odt_styles::common::XmlWriter;
///
/// # fn main() -> odt_styles::Result<()> {
/// let mut xml = XmlWriter::new();
/// xml.start_element("style:style")?;
/// xml.write_attribute("style:name", "Body")?;
/// xml.write_attribute_if(false, "style:class", "text")?;
/// xml.end_element()?;
/// assert_eq!(xml.finish()?, r#"<style:style style:name="Body"/>"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct XmlWriter {
    buf: String,
    options: WriterOptions,
    stack: Vec<OpenElement>,
    tag_open: bool,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    /// Create a compact writer without XML declaration.
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    /// Create a writer with the given output options.
    pub fn with_options(options: WriterOptions) -> Self {
        let mut buf = String::with_capacity(256);
        if options.declaration {
            buf.push_str(XML_DECLARATION);
            buf.push('\n');
        }
        Self {
            buf,
            options,
            stack: Vec::new(),
            tag_open: false,
        }
    }

    /// Start a new element as a child of the current one.
    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.close_start_tag();
        if let Some(parent) = self.stack.last_mut() {
            parent.has_children = true;
        }
        self.write_indent(self.stack.len());

        self.buf.push('<');
        self.buf.push_str(name);
        self.tag_open = true;
        self.stack.push(OpenElement {
            name: name.to_string(),
            has_children: false,
        });
        Ok(())
    }

    /// Write an attribute on the element whose start tag is still open.
    pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.tag_open {
            return Err(Error::Xml(format!(
                "attribute '{}' written outside a start tag",
                name
            )));
        }
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        push_escaped(&mut self.buf, value);
        self.buf.push('"');
        Ok(())
    }

    /// Write an attribute only when `condition` holds.
    #[inline]
    pub fn write_attribute_if(&mut self, condition: bool, name: &str, value: &str) -> Result<()> {
        if condition {
            self.write_attribute(name, value)
        } else {
            Ok(())
        }
    }

    /// End the innermost open element.
    pub fn end_element(&mut self) -> Result<()> {
        let element = self
            .stack
            .pop()
            .ok_or_else(|| Error::Xml("no open element to end".to_string()))?;

        if self.tag_open {
            self.buf.push_str("/>");
            self.tag_open = false;
        } else {
            if element.has_children {
                self.write_indent(self.stack.len());
            }
            self.buf.push_str("</");
            self.buf.push_str(&element.name);
            self.buf.push('>');
        }
        Ok(())
    }

    /// Number of elements currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Output written so far, including any still-open start tag.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Finish writing and return the document.
    ///
    /// # Errors
    ///
    /// Returns an error if any element is still open.
    pub fn finish(self) -> Result<String> {
        if let Some(open) = self.stack.last() {
            return Err(Error::Xml(format!(
                "element '{}' not closed ({} open)",
                open.name,
                self.stack.len()
            )));
        }
        Ok(self.buf)
    }

    fn close_start_tag(&mut self) {
        if self.tag_open {
            self.buf.push('>');
            self.tag_open = false;
        }
    }

    fn write_indent(&mut self, depth: usize) {
        let Some(width) = self.options.indent else {
            return;
        };
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
        for _ in 0..depth * width {
            self.buf.push(' ');
        }
    }
}
