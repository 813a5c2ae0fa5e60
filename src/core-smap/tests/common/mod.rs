//! Helpers shared by the integration tests: re-parsing produced documents.

#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::Event;

/// What a produced document looks like once parsed back as generic XML.
#[derive(Debug)]
pub struct ParsedDocument {
    pub root: String,
    pub namespace: Option<String>,
    /// Text of every `<loc>` element, in document order.
    pub locs: Vec<String>,
    /// Number of direct entries (`url` or `sitemap` elements).
    pub entries: usize,
}

pub fn parse_document(xml: &str) -> ParsedDocument {
    let mut reader = Reader::from_str(xml);
    let mut root: Option<String> = None;
    let mut namespace = None;
    let mut locs = Vec::new();
    let mut entries = 0;
    let mut current_loc: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if root.is_none() {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"xmlns" {
                            namespace = Some(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                    root = Some(name);
                } else if name == "url" || name == "sitemap" {
                    entries += 1;
                } else if name == "loc" {
                    current_loc = Some(String::new());
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&e.unescape().expect("valid escaped text"));
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"loc" {
                    if let Some(loc) = current_loc.take() {
                        locs.push(loc);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("produced XML is malformed: {e}"),
            _ => {}
        }
    }

    ParsedDocument {
        root: root.expect("document has a root element"),
        namespace,
        locs,
        entries,
    }
}
