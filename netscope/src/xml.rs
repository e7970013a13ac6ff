//! Permissive structural parsing of XML-like configuration documents.
//!
//! NETCONF payloads, `.yin` models, and ad-hoc device exports do not share a
//! root element name, so the extractor accepts any root and returns its raw
//! inner serialization as an opaque search surface. Entities are left
//! encoded; the caller only probes the text for a term, it never interprets
//! the markup.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Failure to extract structural content from a document.
///
/// Always recoverable: the per-file search treats it as "no structural pass
/// for this file" and falls back to plain line matching.
#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("document has no root element")]
    NoRoot,
    #[error("unexpected {0} before root element")]
    UnexpectedEvent(&'static str),
}

/// Extracts the raw inner content of the first (root) element in `document`.
///
/// Prolog events (XML declaration, comments, processing instructions,
/// doctype) and inter-element whitespace are skipped. An empty root element
/// yields an empty string.
pub fn extract_inner_content(document: &str) -> Result<String, ParseFailure> {
    let mut reader = Reader::from_str(document);

    loop {
        match reader.read_event()? {
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Text(t) => {
                // Anything other than whitespace outside an element means
                // this is not a markup document.
                if !t.iter().all(|b| b.is_ascii_whitespace()) {
                    return Err(ParseFailure::UnexpectedEvent("text"));
                }
            }
            Event::Start(start) => {
                let inner = reader.read_text(start.name())?;
                return Ok(inner.into_owned());
            }
            Event::Empty(_) => return Ok(String::new()),
            Event::End(_) => return Err(ParseFailure::UnexpectedEvent("closing tag")),
            Event::CData(_) => return Err(ParseFailure::UnexpectedEvent("CDATA")),
            Event::Eof => return Err(ParseFailure::NoRoot),
        }
    }
}
