//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "epivigila",
    version,
    about = "Dengue case reporting - filter and aggregate surveillance spreadsheets",
    long_about = "Load SIGSA/Epivigila surveillance spreadsheets (XLSX or CSV), filter by\n\
                  health area, municipality, health service and dengue type, aggregate\n\
                  case counts by epidemiological week, and export the filtered table\n\
                  as CSV plus a line-chart specification as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the filtered weekly case report from one or more spreadsheets.
    Report(ReportArgs),

    /// List the selectable values for every filter dimension.
    Selectors(SelectorsArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Source spreadsheets (.xlsx, .xlsm, .xls or .csv), concatenated in order.
    #[arg(value_name = "FILE", required = true)]
    pub sources: Vec<PathBuf>,

    /// Keep only these health areas (repeatable).
    #[arg(long = "health-area", value_name = "AREA")]
    pub health_areas: Vec<String>,

    /// Keep only these municipalities (repeatable).
    #[arg(long = "municipality", value_name = "MUNICIPALITY")]
    pub municipalities: Vec<String>,

    /// Keep only these health services (repeatable).
    #[arg(long = "health-service", value_name = "SERVICE")]
    pub health_services: Vec<String>,

    /// Keep only these dengue types (repeatable). Passing "Total" collapses
    /// every type into one summed series and overrides other --diagnosis
    /// values.
    #[arg(long = "diagnosis", value_name = "TYPE")]
    pub diagnoses: Vec<String>,

    /// Write the filtered table as CSV to this path.
    #[arg(long = "csv-out", value_name = "PATH")]
    pub csv_out: Option<PathBuf>,

    /// Write the chart specification as JSON to this path.
    #[arg(long = "chart-out", value_name = "PATH")]
    pub chart_out: Option<PathBuf>,

    /// Maximum number of table rows to print.
    #[arg(long = "limit", value_name = "ROWS", default_value_t = 20)]
    pub limit: usize,

    /// Skip printing the table (exports still happen).
    #[arg(long = "no-table")]
    pub no_table: bool,
}

#[derive(Parser)]
pub struct SelectorsArgs {
    /// Source spreadsheets (.xlsx, .xlsm, .xls or .csv).
    #[arg(value_name = "FILE", required = true)]
    pub sources: Vec<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
