//! Excel importer implementation - Excel (.xlsx) → FMG document

use crate::error::{FmgError, FmgResult};
use crate::types::{FmgDocument, TextEntry};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Excel importer for converting translated .xlsx files back to FMG documents
pub struct ExcelImporter {
    path: std::path::PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the first worksheet into an `FmgDocument`.
    ///
    /// Data rows start under the header; the first row with a blank ID cell
    /// ends the read, even if later rows are populated.
    pub fn import(&self) -> FmgResult<FmgDocument> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| FmgError::Import(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| FmgError::Import("Workbook has no worksheets".to_string()))?
            .map_err(|e| FmgError::Import(format!("Failed to read worksheet: {}", e)))?;

        let doc = document_from_range(&range);
        tracing::debug!("Imported {} entries from {:?}", doc.len(), self.path);
        Ok(doc)
    }
}

/// Read data rows (row 1 onward, header skipped) until the first blank ID.
fn document_from_range(range: &Range<Data>) -> FmgDocument {
    let (height, _width) = range.get_size();
    let mut doc = FmgDocument::new();

    for row in 1..height {
        let id = match range.get((row, 0)) {
            None | Some(Data::Empty) => break,
            Some(cell) => cell_to_string(cell),
        };
        if id.is_empty() {
            break;
        }

        let content = range.get((row, 1)).map(cell_to_string).unwrap_or_default();
        doc.push(TextEntry::new(id, content));
    }

    doc
}

/// Coerce a cell to its string form.
///
/// Spreadsheet editors turn numeric-looking text into floats, so fractionless
/// floats print as integers to keep numeric ids stable across a round trip.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range_from_rows(rows: &[(Option<Data>, Option<Data>)]) -> Range<Data> {
        // Two columns, header at (0, 0)
        let mut range = Range::new((0, 0), (rows.len() as u32, 1));
        range.set_value((0, 0), Data::String("ID".to_string()));
        range.set_value((0, 1), Data::String("Content".to_string()));
        for (idx, (id, content)) in rows.iter().enumerate() {
            let row = idx as u32 + 1;
            if let Some(id) = id {
                range.set_value((row, 0), id.clone());
            }
            if let Some(content) = content {
                range.set_value((row, 1), content.clone());
            }
        }
        range
    }

    #[test]
    fn test_import_basic_rows() {
        let range = range_from_rows(&[
            (Some(Data::String("1".into())), Some(Data::String("Dagger".into()))),
            (Some(Data::String("2".into())), Some(Data::String("%null%".into()))),
        ]);

        let doc = document_from_range(&range);
        assert_eq!(
            doc.entries,
            vec![
                TextEntry::new("1", "Dagger"),
                TextEntry::new("2", "%null%"),
            ]
        );
    }

    #[test]
    fn test_import_stops_at_blank_id() {
        let range = range_from_rows(&[
            (Some(Data::String("1".into())), Some(Data::String("kept".into()))),
            (Some(Data::String("2".into())), Some(Data::String("kept too".into()))),
            (Some(Data::String("3".into())), Some(Data::String("kept three".into()))),
            (None, Some(Data::String("orphan content".into()))),
            (Some(Data::String("9".into())), Some(Data::String("ignored".into()))),
        ]);

        let doc = document_from_range(&range);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.entries[2].id, "3");
    }

    #[test]
    fn test_import_empty_string_id_also_stops() {
        let range = range_from_rows(&[
            (Some(Data::String("1".into())), Some(Data::String("kept".into()))),
            (Some(Data::String(String::new())), Some(Data::String("ignored".into()))),
        ]);

        assert_eq!(document_from_range(&range).len(), 1);
    }

    #[test]
    fn test_import_missing_content_becomes_empty() {
        let range = range_from_rows(&[(Some(Data::String("1".into())), None)]);

        let doc = document_from_range(&range);
        assert_eq!(doc.entries, vec![TextEntry::new("1", "")]);
    }

    #[test]
    fn test_cell_to_string_numeric_ids() {
        assert_eq!(cell_to_string(&Data::Int(12)), "12");
        assert_eq!(cell_to_string(&Data::Float(12.0)), "12");
        assert_eq!(cell_to_string(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_to_string(&Data::String("012".to_string())), "012");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_import_header_only_sheet_is_empty() {
        let range = range_from_rows(&[]);
        assert!(document_from_range(&range).is_empty());
    }
}
