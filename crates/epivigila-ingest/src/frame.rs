//! Unified case-frame construction.
//!
//! Each source file becomes one typed frame in canonical column order; the
//! loader vstacks them in input order with no row-level dedup. Duplicate
//! (area, municipality, service, diagnosis, week, year) combinations stay
//! separate rows until aggregation is explicitly requested downstream.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info, warn};

use epivigila_model::schema::{
    CASE_COUNT, CanonicalColumn, DIAGNOSIS_TYPE, EPI_WEEK, EPI_YEAR, HEALTH_AREA, HEALTH_SERVICE,
    MUNICIPALITY, is_identifier_label,
};

use crate::csv_source::read_csv_table;
use crate::error::{Result, SourceFormatError};
use crate::polars_utils::{parse_f64, parse_i64};
use crate::sheet::SheetTable;
use crate::xlsx::read_xlsx_table;

/// Load every source file and concatenate the per-file frames into the
/// unified case table. The result is immutable for the session; a new load
/// replaces it wholesale.
pub fn load_sources(paths: &[PathBuf]) -> Result<DataFrame> {
    if paths.is_empty() {
        return Err(SourceFormatError::NoSources);
    }
    let start = Instant::now();
    let mut unified: Option<DataFrame> = None;
    for path in paths {
        let frame = load_source(path)?;
        match unified.as_mut() {
            Some(existing) => {
                existing.vstack_mut(&frame)?;
            }
            None => unified = Some(frame),
        }
    }
    // paths is non-empty, so the loop always produced a frame
    let unified = unified.unwrap_or_default();
    info!(
        file_count = paths.len(),
        row_count = unified.height(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(unified)
}

/// Load a single source file into a typed case frame.
pub fn load_source(path: &Path) -> Result<DataFrame> {
    let table = read_sheet(path)?;
    build_case_frame(&table, path)
}

fn read_sheet(path: &Path) -> Result<SheetTable> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" => read_xlsx_table(path),
        "csv" => read_csv_table(path),
        _ => Err(SourceFormatError::UnsupportedSource {
            path: path.to_path_buf(),
        }),
    }
}

struct CaseRow<'a> {
    health_area: &'a str,
    municipality: &'a str,
    health_service: &'a str,
    diagnosis_type: &'a str,
    epi_week: i64,
    epi_year: i64,
    case_count: f64,
}

/// Normalize a raw sheet against the schema vocabulary and build the typed
/// frame.
///
/// Rows with a blank dimension value or an unparseable week/year/count are
/// dropped; they would violate the non-null invariant and poison the
/// numeric sort.
pub fn build_case_frame(table: &SheetTable, source: &Path) -> Result<DataFrame> {
    let column_index = resolve_columns(table, source)?;

    let mut health_areas: Vec<String> = Vec::with_capacity(table.rows.len());
    let mut municipalities: Vec<String> = Vec::with_capacity(table.rows.len());
    let mut health_services: Vec<String> = Vec::with_capacity(table.rows.len());
    let mut diagnoses: Vec<String> = Vec::with_capacity(table.rows.len());
    let mut weeks: Vec<i64> = Vec::with_capacity(table.rows.len());
    let mut years: Vec<i64> = Vec::with_capacity(table.rows.len());
    let mut counts: Vec<f64> = Vec::with_capacity(table.rows.len());

    let mut dropped = 0usize;
    for row in &table.rows {
        let Some(case) = extract_case(row, &column_index) else {
            dropped += 1;
            continue;
        };
        health_areas.push(case.health_area.to_string());
        municipalities.push(case.municipality.to_string());
        health_services.push(case.health_service.to_string());
        diagnoses.push(case.diagnosis_type.to_string());
        weeks.push(case.epi_week);
        years.push(case.epi_year);
        counts.push(case.case_count);
    }
    if dropped > 0 {
        warn!(
            source = %source.display(),
            dropped,
            "dropped rows with missing or non-numeric values"
        );
    }

    let columns: Vec<Column> = vec![
        Series::new(HEALTH_AREA.into(), health_areas).into(),
        Series::new(MUNICIPALITY.into(), municipalities).into(),
        Series::new(HEALTH_SERVICE.into(), health_services).into(),
        Series::new(DIAGNOSIS_TYPE.into(), diagnoses).into(),
        Series::new(EPI_WEEK.into(), weeks).into(),
        Series::new(EPI_YEAR.into(), years).into(),
        Series::new(CASE_COUNT.into(), counts).into(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Map header positions to canonical columns, requiring all of them.
fn resolve_columns(
    table: &SheetTable,
    source: &Path,
) -> Result<BTreeMap<CanonicalColumn, usize>> {
    let mut column_index: BTreeMap<CanonicalColumn, usize> = BTreeMap::new();
    for (idx, header) in table.headers.iter().enumerate() {
        if is_identifier_label(header) {
            // Optional CIE-10 identifier: dropped when present, never required.
            debug!(source = %source.display(), header = %header, "dropping identifier column");
            continue;
        }
        match CanonicalColumn::from_source_label(header) {
            Some(column) => {
                if column_index.contains_key(&column) {
                    debug!(
                        source = %source.display(),
                        header = %header,
                        column = column.as_str(),
                        "duplicate mapping ignored, first occurrence wins"
                    );
                } else {
                    column_index.insert(column, idx);
                }
            }
            None => {
                debug!(source = %source.display(), header = %header, "unrecognized column ignored");
            }
        }
    }
    for column in CanonicalColumn::ALL {
        if !column_index.contains_key(&column) {
            return Err(SourceFormatError::MissingColumn {
                column: column.as_str(),
                path: source.to_path_buf(),
            });
        }
    }
    Ok(column_index)
}

fn extract_case<'a>(
    row: &'a [String],
    column_index: &BTreeMap<CanonicalColumn, usize>,
) -> Option<CaseRow<'a>> {
    let cell = |column: CanonicalColumn| -> Option<&'a str> {
        let value = row.get(*column_index.get(&column)?)?.trim();
        if value.is_empty() { None } else { Some(value) }
    };
    Some(CaseRow {
        health_area: cell(CanonicalColumn::HealthArea)?,
        municipality: cell(CanonicalColumn::Municipality)?,
        health_service: cell(CanonicalColumn::HealthService)?,
        diagnosis_type: cell(CanonicalColumn::DiagnosisType)?,
        epi_week: parse_i64(cell(CanonicalColumn::EpiWeek)?)?,
        epi_year: parse_i64(cell(CanonicalColumn::EpiYear)?)?,
        case_count: parse_f64(cell(CanonicalColumn::CaseCount)?)?,
    })
}
