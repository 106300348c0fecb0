//! FMG XML parsing
//!
//! Pulls every `<text id="...">` element out of an FMG text bank, at any
//! nesting depth, in document order. The surrounding structure (`<fmg>`,
//! `<entries>`, metadata elements) is not validated here; the serializer owns
//! the output grammar.

use crate::error::FmgResult;
use crate::types::{FmgDocument, TextEntry};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Parse an FMG XML file into a document.
///
/// # Errors
/// Returns an error if the file cannot be read or the XML is malformed.
pub fn parse_fmg<P: AsRef<Path>>(path: P) -> FmgResult<FmgDocument> {
    let content = fs::read_to_string(&path)?;
    let doc = from_xml(&content)?;
    tracing::debug!(
        "Parsed {} entries from {:?}",
        doc.len(),
        path.as_ref()
    );
    Ok(doc)
}

/// Parse FMG XML text into a document.
///
/// Entry content is the element text up to its first child element,
/// entity-unescaped, with leading/trailing whitespace stripped. Embedded
/// newlines are preserved.
///
/// # Errors
/// Returns an error if XML parsing fails.
pub fn from_xml(content: &str) -> FmgResult<FmgDocument> {
    let mut reader = Reader::from_str(content);
    // Reader-level whitespace trimming stays off: interior newlines are
    // significant, stripping happens per entry below.

    let mut doc = FmgDocument::new();
    let mut buf = Vec::new();

    // State for the <text> element currently open, if any
    let mut current_id: Option<String> = None;
    let mut current_text = String::new();
    let mut saw_child = false;
    let mut child_depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                saw_root = true;
                if current_id.is_some() {
                    // Markup nested inside <text> is not content
                    saw_child = true;
                    child_depth += 1;
                } else if e.name().as_ref() == b"text" {
                    current_id = Some(id_attribute(&e)?);
                    current_text.clear();
                    saw_child = false;
                }
            }
            Ok(Event::Empty(e)) => {
                saw_root = true;
                if current_id.is_some() {
                    saw_child = true;
                } else if e.name().as_ref() == b"text" {
                    doc.push(TextEntry::new(id_attribute(&e)?, ""));
                }
            }
            Ok(Event::End(_)) => {
                if child_depth > 0 {
                    child_depth -= 1;
                } else if let Some(id) = current_id.take() {
                    doc.push(TextEntry::new(id, current_text.trim()));
                }
            }
            Ok(Event::Text(e)) => {
                if current_id.is_some() && !saw_child {
                    current_text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::CData(e)) => {
                if current_id.is_some() && !saw_child {
                    current_text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => {
                if current_id.is_some() || !saw_root {
                    // Truncated or non-XML input
                    return Err(quick_xml::Error::UnexpectedEof("fmg".to_string()).into());
                }
                break;
            }
            Ok(_) => {}
            Err(e) => return Err(e.into()),
        }
        buf.clear();
    }

    Ok(doc)
}

fn id_attribute(elem: &BytesStart) -> FmgResult<String> {
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"id" {
            return Ok(String::from_utf8_lossy(&attr.value).into_owned());
        }
    }
    // Entries without an id pass through with a blank one
    Ok(String::new())
}
