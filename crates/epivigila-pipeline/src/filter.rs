//! Dimension filtering, Total-mode aggregation, and time ordering.

use std::collections::BTreeSet;

use polars::prelude::{
    BooleanChunked, DataFrame, Expr, IntoLazy, PolarsResult, SortMultipleOptions, col, lit,
};
use tracing::debug;

use epivigila_model::schema::{CASE_COUNT, DIAGNOSIS_TYPE, EPI_WEEK, EPI_YEAR};
use epivigila_model::selection::{FilterSelection, TOTAL_DIAGNOSIS};

/// Narrow the unified table to the current selection and produce the
/// display-ready frame, sorted ascending by (year, week).
///
/// Diagnosis handling is modal: when the selection contains the
/// [`TOTAL_DIAGNOSIS`] sentinel, every diagnosis category collapses into
/// one summed `Total` series and any individually selected diagnoses are
/// ignored; otherwise a non-empty diagnosis selection acts as a plain
/// membership filter. An empty result is a valid output, never an error.
/// The input frame is not mutated.
pub fn apply_filters(data: &DataFrame, selection: &FilterSelection) -> PolarsResult<DataFrame> {
    let mut current = data.clone();
    for (column, values) in selection.dimension_filters() {
        if !values.is_empty() {
            current = retain_members(&current, column, values)?;
        }
    }
    if selection.total_mode() {
        current = aggregate_total(&current, selection)?;
    } else if !selection.diagnoses.is_empty() {
        current = retain_members(&current, DIAGNOSIS_TYPE, &selection.diagnoses)?;
    }
    debug!(
        input_rows = data.height(),
        output_rows = current.height(),
        total_mode = selection.total_mode(),
        "filter pass complete"
    );
    sort_by_epi_time(&current)
}

/// Keep rows whose value in `column` is a member of `values`.
fn retain_members(data: &DataFrame, column: &str, values: &[String]) -> PolarsResult<DataFrame> {
    let members: BTreeSet<&str> = values.iter().map(String::as_str).collect();
    let keep: BooleanChunked = data
        .column(column)?
        .str()?
        .iter()
        .map(|value| Some(value.is_some_and(|v| members.contains(v))))
        .collect();
    data.filter(&keep)
}

/// Collapse all diagnosis categories into one summed `Total` series.
///
/// Grouping is by (year, week), widened with each dimension that currently
/// carries a selection so per-dimension breakdowns survive their own
/// filters.
fn aggregate_total(data: &DataFrame, selection: &FilterSelection) -> PolarsResult<DataFrame> {
    let mut keys = vec![col(EPI_YEAR), col(EPI_WEEK)];
    let mut display: Vec<Expr> = Vec::new();
    for (column, values) in selection.dimension_filters() {
        if !values.is_empty() {
            keys.push(col(column));
            display.push(col(column));
        }
    }
    display.extend([
        col(DIAGNOSIS_TYPE),
        col(EPI_WEEK),
        col(EPI_YEAR),
        col(CASE_COUNT),
    ]);
    data.clone()
        .lazy()
        .group_by(keys)
        .agg([col(CASE_COUNT).sum()])
        .with_column(lit(TOTAL_DIAGNOSIS).alias(DIAGNOSIS_TYPE))
        .select(display)
        .collect()
}

/// Ascending, numeric, stable sort by (year, week): week 2 before week 10.
fn sort_by_epi_time(data: &DataFrame) -> PolarsResult<DataFrame> {
    data.sort(
        [EPI_YEAR, EPI_WEEK],
        SortMultipleOptions::default().with_maintain_order(true),
    )
}
