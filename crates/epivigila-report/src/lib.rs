//! Report outputs.
//!
//! The filtered table is exported as UTF-8, comma-delimited CSV with a
//! header row matching the display-ready column names. This is the payload
//! behind the presentation shell's download button.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};

/// Write the display-ready frame as CSV to any writer.
pub fn write_csv<W: Write>(data: &DataFrame, writer: &mut W) -> Result<()> {
    // CsvWriter mutates only frame-internal caches; the data is unchanged.
    let mut frame = data.clone();
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .context("serialize csv")?;
    Ok(())
}

/// Write the display-ready frame as a CSV file at `path`.
pub fn write_csv_file(data: &DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create csv file: {}", path.display()))?;
    write_csv(data, &mut file)
}

/// The CSV export as an in-memory byte buffer, for download-style delivery.
pub fn csv_bytes(data: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(data, &mut buffer)?;
    Ok(buffer)
}
