//! First-sheet XLSX reading via `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::Result;
use crate::sheet::{SheetTable, normalize_cell, row_is_blank};

/// Read the first worksheet of an Excel file as a flat table.
///
/// The first row supplies the column names. A workbook without sheets (or
/// with an empty first sheet) yields an empty table rather than an error;
/// the frame builder decides whether that is acceptable.
pub fn read_xlsx_table(path: &Path) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    let Some(first_sheet) = sheet_names.first().cloned() else {
        debug!(path = %path.display(), "workbook has no sheets");
        return Ok(SheetTable::default());
    };
    let range = workbook.worksheet_range(&first_sheet)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if row_is_blank(&cells) {
            continue;
        }
        raw_rows.push(cells);
    }
    debug!(
        path = %path.display(),
        sheet = %first_sheet,
        row_count = raw_rows.len().saturating_sub(1),
        "read xlsx sheet"
    );
    Ok(SheetTable::from_raw_rows(raw_rows))
}

/// Render a calamine cell as a trimmed string. Whole-valued floats print as
/// integers so week and year cells survive Excel's numeric storage.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => normalize_cell(s),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{f}")
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty | Data::Error(_) => String::new(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(cell_to_string(&Data::Float(2024.0)), "2024");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
    }

    #[test]
    fn empty_and_error_cells_render_blank() {
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn strings_are_trimmed() {
        assert_eq!(cell_to_string(&Data::String("  Guatemala ".to_string())), "Guatemala");
    }
}
