//! Spreadsheet ingestion for the Epivigila reporting toolkit.
//!
//! The loader reads one or more tabular source files (XLSX through
//! `calamine`, CSV through `csv`), normalizes their headers against the
//! schema vocabulary in `epivigila-model`, and concatenates everything into
//! a single unified Polars frame that the filter/aggregate pipeline
//! consumes.

pub mod csv_source;
pub mod error;
pub mod frame;
pub mod polars_utils;
pub mod sheet;
pub mod xlsx;

pub use csv_source::read_csv_table;
pub use error::SourceFormatError;
pub use frame::{build_case_frame, load_source, load_sources};
pub use polars_utils::{any_to_f64, any_to_i64, any_to_string, format_numeric, parse_f64, parse_i64};
pub use sheet::SheetTable;
pub use xlsx::read_xlsx_table;
