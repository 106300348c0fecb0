//! FMG XML serialization
//!
//! The consumer of these files expects an exact line sequence: fixed header
//! elements, one block per entry, multi-line content continued across raw
//! lines with the closing tag glued to the last line, and no entity escaping.
//! A generic XML writer would re-escape and re-indent, so this module writes
//! the lines itself.

use crate::error::FmgResult;
use crate::types::{FmgDocument, TextEntry};
use std::fs;
use std::path::Path;

/// Serialize a document to the full FMG XML text, trailing newline included.
pub fn serialize_fmg(doc: &FmgDocument) -> String {
    let mut lines: Vec<String> = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        "<fmg>".to_string(),
        format!("<compression>{}</compression>", FmgDocument::COMPRESSION),
        format!("<version>{}</version>", FmgDocument::VERSION),
        format!("<bigendian>{}</bigendian>", FmgDocument::BIG_ENDIAN),
        "<entries>".to_string(),
    ];

    for entry in &doc.entries {
        push_entry_lines(&mut lines, entry);
    }

    lines.push("</entries>".to_string());
    lines.push("</fmg>".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Serialize a document and write it to `path` as UTF-8.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_fmg<P: AsRef<Path>>(path: P, doc: &FmgDocument) -> FmgResult<()> {
    tracing::debug!("Writing {} entries to {:?}", doc.len(), path.as_ref());
    fs::write(path, serialize_fmg(doc))?;
    Ok(())
}

fn push_entry_lines(lines: &mut Vec<String>, entry: &TextEntry) {
    let TextEntry { id, content } = entry;

    if !content.contains('\n') {
        lines.push(format!("<text id=\"{id}\">{content}</text>"));
        return;
    }

    // Trailing blank lines are dropped; interior blanks are content
    let mut content_lines: Vec<&str> = content.split('\n').collect();
    while content_lines.last().is_some_and(|l| l.trim().is_empty()) {
        content_lines.pop();
    }

    match content_lines.as_slice() {
        [] => lines.push(format!("<text id=\"{id}\"></text>")),
        [only] => lines.push(format!("<text id=\"{id}\">{only}</text>")),
        [first, interior @ .., last] => {
            lines.push(format!("<text id=\"{id}\">{first}"));
            for line in interior {
                lines.push((*line).to_string());
            }
            lines.push(format!("{last}</text>"));
        }
    }
}
