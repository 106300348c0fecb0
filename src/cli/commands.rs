//! Per-file conversion commands and the batch dispatch loop
//!
//! Every conversion resolves to a single human-readable result string, one
//! per input file. Failures never cross the per-file boundary: a broken file
//! reports its error line and the loop moves on to the next argument.

use crate::error::FmgResult;
use crate::excel::{ExcelExporter, ExcelImporter};
use crate::{parser, writer};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Process every file argument in order, then print the batch summary.
///
/// Dispatch is by extension, case-insensitive. Counts track dispatches, not
/// successes. The loop never fails; the process exits zero regardless of
/// per-file outcomes.
pub fn run(files: &[PathBuf]) {
    if files.is_empty() {
        println!(
            "{}",
            "Drop .xml or .xlsx files onto fmgsheet, or pass them as arguments.".yellow()
        );
        return;
    }

    let mut xml_count = 0usize;
    let mut xlsx_count = 0usize;

    for file in files {
        if !file.is_file() {
            println!("{} {}", "Skipping missing file:".yellow(), file.display());
            continue;
        }

        let ext = file
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("xml") => {
                xml_count += 1;
                println!("{}", convert_xml_file(file));
            }
            Some("xlsx") => {
                xlsx_count += 1;
                println!("{}", convert_excel_file(file));
            }
            _ => {
                println!(
                    "{} {}",
                    "Skipping unsupported file type:".yellow(),
                    file.display()
                );
            }
        }
    }

    println!(
        "{}",
        format!("Done: {xml_count} XML file(s), {xlsx_count} Excel file(s)")
            .bold()
            .green()
    );
}

/// Convert one FMG .xml file to .xlsx next to it, returning the result line.
pub fn convert_xml_file(path: &Path) -> String {
    match xml_to_excel(path) {
        Ok(output) => format!(
            "{} {} -> {}",
            "Converted:".green(),
            path.display(),
            output.display()
        ),
        Err(err) if err.is_xml_parse_error() => format!(
            "{} {}: {}",
            "Failed to parse".red(),
            path.display(),
            err
        ),
        Err(err) => format!(
            "{} {}: {}",
            "Error processing".red(),
            path.display(),
            err
        ),
    }
}

/// Convert one .xlsx file back to FMG .xml next to it, returning the result line.
pub fn convert_excel_file(path: &Path) -> String {
    match excel_to_xml(path) {
        Ok(output) => format!(
            "{} {} -> {}",
            "Converted:".green(),
            path.display(),
            output.display()
        ),
        Err(err) => format!(
            "{} {}: {}",
            "Error processing".red(),
            path.display(),
            err
        ),
    }
}

fn xml_to_excel(path: &Path) -> FmgResult<PathBuf> {
    let doc = parser::parse_fmg(path)?;
    let output = path.with_extension("xlsx");
    ExcelExporter::new(doc).export(&output)?;
    Ok(output)
}

fn excel_to_xml(path: &Path) -> FmgResult<PathBuf> {
    let doc = ExcelImporter::new(path).import()?;
    let output = path.with_extension("xml");
    writer::write_fmg(&output, &doc)?;
    Ok(output)
}
