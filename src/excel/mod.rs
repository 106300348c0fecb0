//! Excel import/export module for FMG text banks
//!
//! This module provides bidirectional FMG ↔ Excel conversion:
//! - Export: FMG document → styled .xlsx for translators
//! - Import: edited .xlsx → FMG document

mod exporter;
mod importer;

pub use exporter::{classify, ExcelExporter, RowCategory};
pub use importer::ExcelImporter;
