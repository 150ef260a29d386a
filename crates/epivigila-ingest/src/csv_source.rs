//! CSV source reading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::Result;
use crate::sheet::{SheetTable, normalize_cell, row_is_blank};

/// Read a CSV file as a flat table, first row as column names.
///
/// The reader is flexible about ragged rows; the sheet model pads them to
/// the header width. Fully blank lines are skipped.
pub fn read_csv_table(path: &Path) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if row_is_blank(&cells) {
            continue;
        }
        raw_rows.push(cells);
    }
    debug!(
        path = %path.display(),
        row_count = raw_rows.len().saturating_sub(1),
        "read csv file"
    );
    Ok(SheetTable::from_raw_rows(raw_rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "Municipio,Semana").unwrap();
        writeln!(file, "Mixco,3").unwrap();
        writeln!(file, ",").unwrap();
        writeln!(file, "Villa Nueva,4").unwrap();
        file.flush().unwrap();

        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["Municipio", "Semana"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Villa Nueva", "4"]);
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        let table = read_csv_table(file.path()).unwrap();
        assert!(table.is_empty());
    }
}
