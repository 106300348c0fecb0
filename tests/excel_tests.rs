//! Excel export/import integration tests
//!
//! These go through real .xlsx files on disk: what the exporter writes is
//! read back with the importer, so the two sides are tested against each
//! other rather than against fixtures.

use fmgsheet::excel::{ExcelExporter, ExcelImporter};
use fmgsheet::types::{FmgDocument, TextEntry};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn doc_from(entries: &[(&str, &str)]) -> FmgDocument {
    let mut doc = FmgDocument::new();
    for (id, content) in entries {
        doc.push(TextEntry::new(*id, *content));
    }
    doc
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPORT → IMPORT ROUND TRIPS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_round_trip_preserves_entry_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bank.xlsx");

    let doc = doc_from(&[
        ("1", "Dagger"),
        ("2", "%null%"),
        ("3", "Short blade.\nFavored by assassins."),
        ("4", ""),
        ("5", "短剣"),
    ]);

    ExcelExporter::new(doc.clone()).export(&path).unwrap();
    let round_tripped = ExcelImporter::new(&path).import().unwrap();

    assert_eq!(round_tripped, doc);
}

#[test]
fn test_round_trip_keeps_duplicate_and_unsorted_ids() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dupes.xlsx");

    let doc = doc_from(&[("30", "c"), ("10", "a"), ("30", "c again")]);

    ExcelExporter::new(doc.clone()).export(&path).unwrap();
    let round_tripped = ExcelImporter::new(&path).import().unwrap();

    assert_eq!(round_tripped, doc);
}

#[test]
fn test_round_trip_consecutive_null_runs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nulls.xlsx");

    // Rows 2-4 and 7-8 become the two hidden groups; grouping is cosmetic
    // and must not affect the data read back
    let doc = doc_from(&[
        ("1", "%null%"),
        ("2", "%null%"),
        ("3", "%null%"),
        ("4", "kept"),
        ("5", "kept too"),
        ("6", "%null%"),
        ("7", "%null%"),
    ]);

    ExcelExporter::new(doc.clone()).export(&path).unwrap();
    let round_tripped = ExcelImporter::new(&path).import().unwrap();

    assert_eq!(round_tripped, doc);
}

#[test]
fn test_export_empty_document_imports_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.xlsx");

    ExcelExporter::new(FmgDocument::new()).export(&path).unwrap();

    assert!(path.exists());
    let round_tripped = ExcelImporter::new(&path).import().unwrap();
    assert!(round_tripped.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORTER BEHAVIOR ON FOREIGN WORKBOOKS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_truncates_at_blank_id_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("truncated.xlsx");

    // Hand-built workbook: rows 2-4 populated, row 5 has content but no ID,
    // row 6 populated again. Everything from row 5 on must be ignored.
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "ID").unwrap();
    worksheet.write_string(0, 1, "Content").unwrap();
    for (row, (id, content)) in [("1", "a"), ("2", "b"), ("3", "c")].iter().enumerate() {
        worksheet.write_string(row as u32 + 1, 0, *id).unwrap();
        worksheet.write_string(row as u32 + 1, 1, *content).unwrap();
    }
    worksheet.write_string(4, 1, "orphan content").unwrap();
    worksheet.write_string(5, 0, "9").unwrap();
    worksheet.write_string(5, 1, "ignored").unwrap();
    workbook.save(&path).unwrap();

    let doc = ExcelImporter::new(&path).import().unwrap();

    assert_eq!(
        doc,
        doc_from(&[("1", "a"), ("2", "b"), ("3", "c")])
    );
}

#[test]
fn test_import_coerces_numeric_cells_to_strings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("numeric.xlsx");

    // A translator's spreadsheet app will have turned numeric ids into floats
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "ID").unwrap();
    worksheet.write_string(0, 1, "Content").unwrap();
    worksheet.write_number(1, 0, 12.0).unwrap();
    worksheet.write_number(1, 1, 3.5).unwrap();
    workbook.save(&path).unwrap();

    let doc = ExcelImporter::new(&path).import().unwrap();

    assert_eq!(doc.entries, vec![TextEntry::new("12", "3.5")]);
}

#[test]
fn test_import_rejects_non_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fake.xlsx");
    std::fs::write(&path, "not an xlsx archive").unwrap();

    let result = ExcelImporter::new(&path).import();
    assert!(result.is_err());
}

#[test]
fn test_import_missing_file() {
    let result = ExcelImporter::new("no/such/dir/file.xlsx").import();
    assert!(result.is_err());
}
