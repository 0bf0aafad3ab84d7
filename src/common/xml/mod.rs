//! XML helpers: escaping and a small streaming writer.

pub mod escape;
pub mod writer;

pub use escape::{escape_xml, push_escaped};
pub use writer::{WriterOptions, XmlWriter};
