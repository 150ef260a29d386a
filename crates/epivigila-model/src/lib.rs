//! Core data model for the Epivigila dengue surveillance reports.
//!
//! This crate defines the canonical case-record schema shared by every other
//! crate in the workspace: the normalized column names, the Spanish
//! source-label vocabulary the loader recognizes, and the filter-selection
//! types the pipeline consumes.

pub mod schema;
pub mod selection;

pub use schema::{
    CASE_COUNT, CanonicalColumn, DIAGNOSIS_TYPE, EPI_WEEK, EPI_YEAR, HEALTH_AREA, HEALTH_SERVICE,
    MUNICIPALITY, is_identifier_label,
};
pub use selection::{FilterSelection, SelectorOptions, TOTAL_DIAGNOSIS};
