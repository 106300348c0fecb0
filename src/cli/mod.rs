//! CLI command handlers

pub mod commands;


pub use commands::{convert_excel_file, convert_xml_file, run};
