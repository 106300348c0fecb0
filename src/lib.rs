//! fmgsheet - FMG string-table converter
//!
//! This library converts the "fmg" localization XML dialect used by game
//! string tables into translator-friendly Excel workbooks and back.
//!
//! # Features
//!
//! - FMG XML → styled .xlsx (color-coded rows, collapsed `%null%` runs,
//!   word wrap, auto-sized columns)
//! - Edited .xlsx → byte-faithful FMG XML via a custom line serializer
//! - Per-file failure isolation for drag-and-drop batch use
//!
//! # Example
//!
//! ```no_run
//! use fmgsheet::excel::ExcelExporter;
//! use fmgsheet::parser::parse_fmg;
//! use std::path::Path;
//!
//! let doc = parse_fmg(Path::new("item_names.xml"))?;
//! println!("Entries: {}", doc.len());
//!
//! let exporter = ExcelExporter::new(doc);
//! exporter.export(Path::new("item_names.xlsx"))?;
//! # Ok::<(), fmgsheet::error::FmgError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{FmgError, FmgResult};
pub use types::{FmgDocument, TextEntry, NULL_MARKER};
