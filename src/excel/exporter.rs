//! Excel exporter implementation

use crate::error::{FmgError, FmgResult};
use crate::types::{FmgDocument, NULL_MARKER};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::path::Path;

const LIGHT_GREEN: Color = Color::RGB(0x90EE90);
const PINK: Color = Color::RGB(0xFFC0CB);

/// Widest a column is allowed to get, regardless of content.
const MAX_COLUMN_WIDTH: f64 = 100.0;

/// Visual category of a data row, decided per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCategory {
    /// Ordinary translated content, light green.
    Default,
    /// `%null%` placeholder, light green and collapsed into a hidden group.
    NullMarker,
    /// Entirely ASCII-alphabetic content, pink: likely untranslated text.
    Latin,
}

/// Classify entry content. The null check runs first; the latin check only
/// applies to non-null content.
pub fn classify(content: &str) -> RowCategory {
    if content == NULL_MARKER {
        RowCategory::NullMarker
    } else if is_latin_flagged(content) {
        RowCategory::Latin
    } else {
        RowCategory::Default
    }
}

/// At least one alphabetic character, and every alphabetic character ASCII.
fn is_latin_flagged(content: &str) -> bool {
    let mut alphabetic = content.chars().filter(|c| c.is_alphabetic()).peekable();
    alphabetic.peek().is_some() && alphabetic.all(|c| c.is_ascii_alphabetic())
}

/// Collapse a sorted row list into maximal runs of consecutive numbers.
fn consecutive_runs(rows: &[u32]) -> Vec<(u32, u32)> {
    let mut runs = Vec::new();
    let mut iter = rows.iter().copied();

    let Some(first) = iter.next() else {
        return runs;
    };

    let mut start = first;
    let mut end = first;
    for row in iter {
        if row == end + 1 {
            end = row;
        } else {
            runs.push((start, end));
            start = row;
            end = row;
        }
    }
    runs.push((start, end));
    runs
}

/// Auto-fit width over every cell of a column, header included.
fn column_width<'a, I>(cells: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let max_len = cells
        .into_iter()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);
    f64::min(MAX_COLUMN_WIDTH, (max_len as f64 + 2.0) * 1.2)
}

/// Excel exporter for FMG documents
pub struct ExcelExporter {
    doc: FmgDocument,
}

impl ExcelExporter {
    /// Create a new Excel exporter
    pub fn new(doc: FmgDocument) -> Self {
        Self { doc }
    }

    /// Export the document to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> FmgResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name("Text Data")
            .map_err(|e| FmgError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_rows(worksheet)?;

        workbook
            .save(output_path)
            .map_err(|e| FmgError::Export(format!("Failed to save Excel file: {}", e)))?;

        tracing::debug!("Exported {} entries to {:?}", self.doc.len(), output_path);
        Ok(())
    }

    fn write_rows(&self, worksheet: &mut Worksheet) -> FmgResult<()> {
        let header = Format::new().set_background_color(LIGHT_GREEN);
        let green = Format::new().set_background_color(LIGHT_GREEN).set_text_wrap();
        let pink = Format::new().set_background_color(PINK).set_text_wrap();

        worksheet
            .write_string_with_format(0, 0, "ID", &header)
            .map_err(|e| FmgError::Export(format!("Failed to write header: {}", e)))?;
        worksheet
            .write_string_with_format(0, 1, "Content", &header)
            .map_err(|e| FmgError::Export(format!("Failed to write header: {}", e)))?;

        // Worksheet rows of %null% entries, in ascending order
        let mut null_rows: Vec<u32> = Vec::new();

        for (idx, entry) in self.doc.entries.iter().enumerate() {
            let row = idx as u32 + 1;
            let format = match classify(&entry.content) {
                RowCategory::Latin => &pink,
                RowCategory::NullMarker => {
                    null_rows.push(row);
                    &green
                }
                RowCategory::Default => &green,
            };

            worksheet
                .write_string_with_format(row, 0, &entry.id, format)
                .map_err(|e| FmgError::Export(format!("Failed to write row {}: {}", row, e)))?;
            worksheet
                .write_string_with_format(row, 1, &entry.content, format)
                .map_err(|e| FmgError::Export(format!("Failed to write row {}: {}", row, e)))?;
        }

        // Each run of consecutive placeholder rows collapses into one group
        for (first, last) in consecutive_runs(&null_rows) {
            worksheet
                .group_rows_collapsed(first, last)
                .map_err(|e| FmgError::Export(format!("Failed to group rows: {}", e)))?;
        }

        let id_width = column_width(
            std::iter::once("ID").chain(self.doc.entries.iter().map(|e| e.id.as_str())),
        );
        let content_width = column_width(
            std::iter::once("Content").chain(self.doc.entries.iter().map(|e| e.content.as_str())),
        );
        worksheet
            .set_column_width(0, id_width)
            .map_err(|e| FmgError::Export(format!("Failed to set column width: {}", e)))?;
        worksheet
            .set_column_width(1, content_width)
            .map_err(|e| FmgError::Export(format!("Failed to set column width: {}", e)))?;

        Ok(())
    }
}
