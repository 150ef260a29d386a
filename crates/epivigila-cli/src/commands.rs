//! Command bodies for the report and selectors subcommands.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use epivigila_chart::{ChartSpec, build_chart};
use epivigila_ingest::load_sources;
use epivigila_model::selection::{FilterSelection, SelectorOptions};
use epivigila_pipeline::{Session, apply_filters, selector_options};
use epivigila_report::write_csv_file;

use crate::cli::{ReportArgs, SelectorsArgs};

/// Everything the report command produced, for presentation.
pub struct ReportResult {
    pub display: DataFrame,
    pub chart: ChartSpec,
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let session = load_session(&args.sources)?;
    let selection = selection_from_args(args);

    let filter_span = info_span!("filter", total_mode = selection.total_mode());
    let display = filter_span
        .in_scope(|| apply_filters(session.data(), &selection))
        .context("apply filters")?;
    let chart = build_chart(&display).context("build chart")?;
    let row_count = display.height();
    info!(
        row_count,
        series_count = chart.series.len(),
        "report ready"
    );

    if let Some(path) = &args.csv_out {
        write_csv_file(&display, path)?;
        info!(path = %path.display(), "csv export written");
    }
    if let Some(path) = &args.chart_out {
        let file = File::create(path)
            .with_context(|| format!("create chart file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &chart).context("serialize chart spec")?;
        info!(path = %path.display(), "chart spec written");
    }

    Ok(ReportResult { display, chart })
}

pub fn run_selectors(args: &SelectorsArgs) -> Result<SelectorOptions> {
    let session = load_session(&args.sources)?;
    let options = selector_options(session.data()).context("derive selector options")?;
    Ok(options)
}

fn load_session(sources: &[PathBuf]) -> Result<Session> {
    let load_span = info_span!("load", file_count = sources.len());
    let data = load_span.in_scope(|| load_sources(sources))?;
    Ok(Session::new(data))
}

fn selection_from_args(args: &ReportArgs) -> FilterSelection {
    FilterSelection {
        health_areas: args.health_areas.clone(),
        municipalities: args.municipalities.clone(),
        health_services: args.health_services.clone(),
        diagnoses: args.diagnoses.clone(),
    }
}
