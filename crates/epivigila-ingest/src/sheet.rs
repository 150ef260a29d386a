//! Raw sheet representation shared by the XLSX and CSV readers.
//!
//! Both readers produce a [`SheetTable`]: the first non-empty row as
//! headers, every following row padded or truncated to the header width.
//! Schema interpretation happens later, in [`crate::frame`].

/// An untyped flat table as read from a source file.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// True when the sheet carried no header row at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Assemble a table from raw rows: first non-empty row becomes the
    /// header, the rest become data rows sized to the header width.
    pub(crate) fn from_raw_rows(raw_rows: Vec<Vec<String>>) -> Self {
        let mut rows_iter = raw_rows.into_iter();
        let Some(header_row) = rows_iter.next() else {
            return SheetTable::default();
        };
        let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();
        let width = headers.len();
        let rows = rows_iter
            .map(|row| {
                let mut sized = Vec::with_capacity(width);
                for idx in 0..width {
                    sized.push(row.get(idx).cloned().unwrap_or_default());
                }
                sized
            })
            .collect();
        SheetTable { headers, rows }
    }
}

/// Trim a header cell, strip a BOM, and collapse internal whitespace runs.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    for part in trimmed.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

/// Trim a data cell and strip a stray BOM.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// True when every cell of the row is blank.
pub(crate) fn row_is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
