use clap::Parser;
use fmgsheet::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fmgsheet")]
#[command(about = "Convert FMG string-table XML to Excel for translation, and back.")]
#[command(long_about = "fmgsheet - FMG string-table converter

Turns game localization XML into translator-friendly Excel workbooks and
re-exports edited workbooks to the exact XML shape the game tooling expects.

DISPATCH (per file, by extension):
  .xml   -> .xlsx   rows color-coded, %null% runs collapsed, columns auto-sized
  .xlsx  -> .xml    reads ID/Content rows until the first blank ID

A broken file never stops the batch: each file reports its own result line
and the summary counts every dispatched file.

EXAMPLES:
  fmgsheet item_names.xml                 # one file to .xlsx
  fmgsheet menus.xlsx dialog.xlsx         # edited workbooks back to .xml
  fmgsheet *.xml *.xlsx                   # mixed batch, processed in order

Set RUST_LOG=debug for conversion diagnostics on stderr.")]
#[command(version)]
struct Cli {
    /// FMG .xml or .xlsx files to convert (drag-and-drop friendly)
    files: Vec<PathBuf>,
}

fn main() {
    // Diagnostics go to stderr so stdout stays one result line per file
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run(&cli.files);
}
