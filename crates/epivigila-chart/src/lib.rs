//! Chart-data reshaping for the weekly case trend plot.
//!
//! Takes the display-ready frame and emits one named line series per
//! distinct diagnosis type, each an ordered list of `(label, value)` points
//! where the label is the zero-padded `WW-YYYY` axis bucket. The spec is
//! serde-serializable so a renderer (plotly or similar) can consume it
//! directly.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, IntoLazy, PolarsResult, SortMultipleOptions, col};
use serde::{Deserialize, Serialize};

use epivigila_model::schema::{CASE_COUNT, DIAGNOSIS_TYPE, EPI_WEEK, EPI_YEAR};

/// One `(label, value)` point on the weekly axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Axis bucket, `WW-YYYY` with a zero-padded week so week 03 sorts
    /// before week 10 lexically too.
    pub label: String,
    pub value: f64,
}

/// A named line series, drawn with connected lines and point markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub mode: String,
    pub points: Vec<ChartPoint>,
}

/// The full chart specification handed to the presentation shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    fn empty() -> Self {
        Self {
            title: "Número de casos por Semana epidemiológica - Año".to_string(),
            x_label: "Semana epidemiológica - Año".to_string(),
            y_label: "Número de casos".to_string(),
            series: Vec::new(),
        }
    }
}

/// Format the `WW-YYYY` axis label for a week/year pair.
pub fn axis_label(week: i64, year: i64) -> String {
    format!("{week:02}-{year}")
}

/// Reshape the display-ready frame into one series per diagnosis type.
///
/// Case counts are re-aggregated here by (year, week, diagnosis) so the
/// builder is correct whether or not the pipeline already collapsed the
/// table; summing an already aggregated frame is a no-op. An empty frame
/// yields a spec with zero series.
pub fn build_chart(data: &DataFrame) -> PolarsResult<ChartSpec> {
    let mut spec = ChartSpec::empty();
    if data.height() == 0 {
        return Ok(spec);
    }

    let aggregated = data
        .clone()
        .lazy()
        .group_by([col(EPI_YEAR), col(EPI_WEEK), col(DIAGNOSIS_TYPE)])
        .agg([col(CASE_COUNT).sum()])
        .sort([EPI_YEAR, EPI_WEEK], SortMultipleOptions::default())
        .collect()?;

    let years = aggregated.column(EPI_YEAR)?.i64()?;
    let weeks = aggregated.column(EPI_WEEK)?.i64()?;
    let diagnoses = aggregated.column(DIAGNOSIS_TYPE)?.str()?;
    let counts = aggregated.column(CASE_COUNT)?.f64()?;

    // BTreeMap keeps series name order deterministic; points arrive already
    // sorted by (year, week).
    let mut series: BTreeMap<String, Vec<ChartPoint>> = BTreeMap::new();
    for idx in 0..aggregated.height() {
        let (Some(year), Some(week), Some(diagnosis), Some(value)) = (
            years.get(idx),
            weeks.get(idx),
            diagnoses.get(idx),
            counts.get(idx),
        ) else {
            continue;
        };
        series.entry(diagnosis.to_string()).or_default().push(ChartPoint {
            label: axis_label(week, year),
            value,
        });
    }

    spec.series = series
        .into_iter()
        .map(|(name, points)| ChartSeries {
            name,
            mode: "lines+markers".to_string(),
            points,
        })
        .collect();
    Ok(spec)
}
