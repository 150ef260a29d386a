//! Terminal rendering of the report table and selector lists.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use polars::prelude::{DataFrame, DataType};

use epivigila_ingest::any_to_string;
use epivigila_model::selection::SelectorOptions;

use crate::commands::ReportResult;

pub fn print_report(result: &ReportResult, limit: usize, show_table: bool) {
    if show_table {
        print_frame(&result.display, limit);
    }
    println!(
        "{} rows, {} chart series",
        result.display.height(),
        result.chart.series.len()
    );
}

pub fn print_selectors(options: &SelectorOptions) {
    print_group("Área de Salud", &options.health_areas);
    print_group("Municipio", &options.municipalities);
    print_group("Servicio de Salud", &options.health_services);
    print_group("Tipo de Dengue", &options.diagnosis_choices());
}

fn print_group(name: &str, values: &[String]) {
    println!("{name} ({}):", values.len());
    for value in values {
        println!("  - {value}");
    }
}

fn print_frame(frame: &DataFrame, limit: usize) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(frame.get_column_names_str());
    let columns = frame.get_columns();
    // Right-align the numeric columns.
    for (idx, column) in columns.iter().enumerate() {
        if matches!(column.dtype(), DataType::Int64 | DataType::Float64)
            && let Some(table_column) = table.column_mut(idx)
        {
            table_column.set_cell_alignment(CellAlignment::Right);
        }
    }
    let shown = frame.height().min(limit);
    for row_idx in 0..shown {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let value = column
                .get(row_idx)
                .map(any_to_string)
                .unwrap_or_default();
            cells.push(Cell::new(value));
        }
        table.add_row(cells);
    }
    println!("{table}");
    if shown < frame.height() {
        println!("... {shown} of {} rows shown", frame.height());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
