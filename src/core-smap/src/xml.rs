//! Incremental XML document encoding on top of `quick_xml::Writer`.
//!
//! An [`XmlDocument`] serializes into an in-memory buffer which the owner drains at
//! flush points. Indentation state lives in the writer, not in the buffer, so draining
//! never changes the bytes that end up on disk.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::Result;

/// Namespace of both `urlset` and `sitemapindex` documents.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const INDENT_SIZE: usize = 4;

pub(crate) struct XmlDocument {
    writer: Writer<Vec<u8>>,
    root: &'static str,
    closed: bool,
}

impl XmlDocument {
    /// Starts a document: XML declaration plus the opening root element carrying the
    /// sitemaps namespace.
    pub(crate) fn open(root: &'static str) -> Result<Self> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new(root).with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
        ))?;
        Ok(Self {
            writer,
            root,
            closed: false,
        })
    }

    pub(crate) fn start_element(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    pub(crate) fn end_element(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes `<name>text</name>`, escaping the text.
    pub(crate) fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start_element(name)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end_element(name)
    }

    /// Closes the root element and ends the document. A second call does nothing.
    pub(crate) fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.end_element(self.root)?;
        self.writer.get_mut().push(b'\n');
        self.closed = true;
        Ok(())
    }

    /// Serialized bytes not yet handed to storage.
    pub(crate) fn buffered(&self) -> &[u8] {
        self.writer.get_ref()
    }

    /// Drops the buffered bytes once they have been persisted.
    pub(crate) fn clear(&mut self) {
        self.writer.get_mut().clear();
    }
}
