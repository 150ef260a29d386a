//! Filter/aggregate pipeline for the unified case table.
//!
//! Given the session's unified frame and a [`FilterSelection`], this crate
//! produces the display-ready frame: dimension filters applied, Total-mode
//! aggregation performed when requested, rows sorted by epidemiological
//! (year, week). It also derives the selector option lists the presentation
//! shell offers for each dimension.

pub mod filter;
pub mod selectors;
pub mod session;

pub use filter::apply_filters;
pub use selectors::selector_options;
pub use session::Session;
