//! Selector option population.

use std::collections::BTreeSet;

use polars::prelude::{DataFrame, PolarsResult};

use epivigila_model::schema::{DIAGNOSIS_TYPE, HEALTH_AREA, HEALTH_SERVICE, MUNICIPALITY};
use epivigila_model::selection::SelectorOptions;

/// Derive the distinct, lexicographically sorted value sets for each
/// filterable dimension. A zero-row table yields empty lists, not an error.
pub fn selector_options(data: &DataFrame) -> PolarsResult<SelectorOptions> {
    Ok(SelectorOptions {
        health_areas: distinct_sorted(data, HEALTH_AREA)?,
        municipalities: distinct_sorted(data, MUNICIPALITY)?,
        health_services: distinct_sorted(data, HEALTH_SERVICE)?,
        diagnoses: distinct_sorted(data, DIAGNOSIS_TYPE)?,
    })
}

fn distinct_sorted(data: &DataFrame, column: &str) -> PolarsResult<Vec<String>> {
    let values = data.column(column)?.str()?;
    let mut distinct = BTreeSet::new();
    for value in values.iter().flatten() {
        if !value.is_empty() {
            distinct.insert(value.to_string());
        }
    }
    Ok(distinct.into_iter().collect())
}
