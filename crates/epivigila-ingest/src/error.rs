//! Loader error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning source spreadsheets into the unified table.
///
/// A missing *required* column aborts the load with no partial table; the
/// optional CIE-10 identifier column is never required. Empty filter results
/// downstream are not errors and never surface here.
#[derive(Debug, Error)]
pub enum SourceFormatError {
    /// A required column is absent after header normalization.
    #[error("required column '{column}' is missing in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    /// The file extension maps to no known reader.
    #[error("unsupported source format: {path} (expected .xlsx, .xlsm, .xls or .csv)")]
    UnsupportedSource { path: PathBuf },

    /// No input file was supplied at all.
    #[error("no input files provided; supply at least one surveillance spreadsheet")]
    NoSources,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Sheet(#[from] calamine::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("frame error: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, SourceFormatError>;
