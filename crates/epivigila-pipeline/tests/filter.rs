//! Behavioral tests for the filter/aggregate pipeline.

use polars::prelude::{DataFrame, NamedFrom, Series};
use proptest::prelude::{ProptestConfig, proptest};

use epivigila_model::schema::{
    CASE_COUNT, DIAGNOSIS_TYPE, EPI_WEEK, EPI_YEAR, HEALTH_AREA, HEALTH_SERVICE, MUNICIPALITY,
};
use epivigila_model::selection::{FilterSelection, TOTAL_DIAGNOSIS};
use epivigila_pipeline::apply_filters;

type CaseTuple = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i64,
    i64,
    f64,
);

fn case_table(rows: &[CaseTuple]) -> DataFrame {
    let mut areas = Vec::new();
    let mut municipalities = Vec::new();
    let mut services = Vec::new();
    let mut diagnoses = Vec::new();
    let mut weeks = Vec::new();
    let mut years = Vec::new();
    let mut counts = Vec::new();
    for (area, municipality, service, diagnosis, week, year, count) in rows {
        areas.push(*area);
        municipalities.push(*municipality);
        services.push(*service);
        diagnoses.push(*diagnosis);
        weeks.push(*week);
        years.push(*year);
        counts.push(*count);
    }
    DataFrame::new(vec![
        Series::new(HEALTH_AREA.into(), areas).into(),
        Series::new(MUNICIPALITY.into(), municipalities).into(),
        Series::new(HEALTH_SERVICE.into(), services).into(),
        Series::new(DIAGNOSIS_TYPE.into(), diagnoses).into(),
        Series::new(EPI_WEEK.into(), weeks).into(),
        Series::new(EPI_YEAR.into(), years).into(),
        Series::new(CASE_COUNT.into(), counts).into(),
    ])
    .unwrap()
}

fn week_year_pairs(frame: &DataFrame) -> Vec<(i64, i64)> {
    let weeks = frame.column(EPI_WEEK).unwrap().i64().unwrap();
    let years = frame.column(EPI_YEAR).unwrap().i64().unwrap();
    years
        .iter()
        .zip(weeks.iter())
        .map(|(year, week)| (year.unwrap(), week.unwrap()))
        .collect()
}

#[test]
fn empty_selection_is_identity_modulo_ordering() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 10, 2024, 4.0),
        ("AreaX", "MunA", "SvcA", "Dengue grave", 2, 2024, 1.0),
        ("AreaY", "MunB", "SvcB", "Dengue clásico", 52, 2023, 9.0),
    ]);
    let output = apply_filters(&data, &FilterSelection::default()).unwrap();
    assert_eq!(output.height(), data.height());
    assert_eq!(
        week_year_pairs(&output),
        vec![(2023, 52), (2024, 2), (2024, 10)]
    );
    // same columns, untouched values
    assert_eq!(output.get_column_names(), data.get_column_names());
}

#[test]
fn membership_filter_is_sound_and_complete() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 1, 2024, 4.0),
        ("AreaY", "MunA", "SvcA", "Dengue clásico", 2, 2024, 1.0),
        ("AreaX", "MunB", "SvcA", "Dengue grave", 3, 2024, 2.0),
    ]);
    let selection = FilterSelection {
        health_areas: vec!["AreaX".to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    assert_eq!(output.height(), 2);
    let areas = output.column(HEALTH_AREA).unwrap().str().unwrap();
    assert!(areas.iter().all(|area| area == Some("AreaX")));
}

#[test]
fn total_mode_collapses_diagnoses_per_week() {
    // Classic 10 + Severe 3 in week 5 of 2023 -> one Total row of 13.
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 5, 2023, 10.0),
        ("AreaX", "MunA", "SvcA", "Dengue grave", 5, 2023, 3.0),
    ]);
    let selection = FilterSelection {
        diagnoses: vec![TOTAL_DIAGNOSIS.to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    assert_eq!(output.height(), 1);
    let diagnoses = output.column(DIAGNOSIS_TYPE).unwrap().str().unwrap();
    assert_eq!(diagnoses.get(0), Some(TOTAL_DIAGNOSIS));
    let counts = output.column(CASE_COUNT).unwrap().f64().unwrap();
    assert_eq!(counts.get(0), Some(13.0));
    assert_eq!(week_year_pairs(&output), vec![(2023, 5)]);
}

#[test]
fn total_mode_ignores_individual_diagnosis_selections() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 5, 2023, 10.0),
        ("AreaX", "MunA", "SvcA", "Dengue grave", 5, 2023, 3.0),
    ]);
    let selection = FilterSelection {
        diagnoses: vec!["Dengue grave".to_string(), TOTAL_DIAGNOSIS.to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    let counts = output.column(CASE_COUNT).unwrap().f64().unwrap();
    assert_eq!(counts.get(0), Some(13.0));
}

#[test]
fn total_mode_preserves_case_count_sums() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 1, 2024, 4.0),
        ("AreaX", "MunA", "SvcA", "Dengue grave", 1, 2024, 2.0),
        ("AreaY", "MunB", "SvcB", "Dengue clásico", 2, 2024, 7.0),
        ("AreaY", "MunB", "SvcB", "Dengue hemorrágico", 2, 2024, 1.0),
    ]);
    let selection = FilterSelection {
        diagnoses: vec![TOTAL_DIAGNOSIS.to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    let total_out: f64 = output
        .column(CASE_COUNT)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .sum();
    let total_in: f64 = data
        .column(CASE_COUNT)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .sum();
    assert_eq!(total_out, total_in);
    assert_eq!(week_year_pairs(&output), vec![(2024, 1), (2024, 2)]);
}

#[test]
fn total_mode_grouping_widens_with_active_dimensions() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 1, 2024, 4.0),
        ("AreaX", "MunB", "SvcA", "Dengue clásico", 1, 2024, 2.0),
        ("AreaX", "MunA", "SvcA", "Dengue grave", 1, 2024, 1.0),
    ]);
    let selection = FilterSelection {
        municipalities: vec!["MunA".to_string(), "MunB".to_string()],
        diagnoses: vec![TOTAL_DIAGNOSIS.to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    // grouped by (year, week, municipality): one row per municipality
    assert_eq!(output.height(), 2);
    assert!(output.column(MUNICIPALITY).is_ok());
    let counts: f64 = output
        .column(CASE_COUNT)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .sum();
    assert_eq!(counts, 7.0);
}

#[test]
fn category_mode_keeps_selected_diagnoses_distinct() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 1, 2024, 4.0),
        ("AreaX", "MunA", "SvcA", "Dengue grave", 1, 2024, 2.0),
        ("AreaX", "MunA", "SvcA", "Dengue hemorrágico", 1, 2024, 1.0),
    ]);
    let selection = FilterSelection {
        diagnoses: vec!["Dengue clásico".to_string(), "Dengue grave".to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    assert_eq!(output.height(), 2);
}

#[test]
fn unmatched_selection_yields_empty_table_not_error() {
    let data = case_table(&[("AreaX", "MunA", "SvcA", "Dengue clásico", 1, 2024, 4.0)]);
    let selection = FilterSelection {
        health_areas: vec!["AreaY".to_string()],
        ..FilterSelection::default()
    };
    let output = apply_filters(&data, &selection).unwrap();
    assert_eq!(output.height(), 0);
}

#[test]
fn week_two_sorts_before_week_ten() {
    let data = case_table(&[
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 10, 2024, 1.0),
        ("AreaX", "MunA", "SvcA", "Dengue clásico", 2, 2024, 1.0),
    ]);
    let output = apply_filters(&data, &FilterSelection::default()).unwrap();
    assert_eq!(week_year_pairs(&output), vec![(2024, 2), (2024, 10)]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Sorting is a strict total order on (year, week).
    #[test]
    fn output_rows_are_totally_ordered(pairs in proptest::collection::vec((2015i64..2030, 1i64..54), 0..40)) {
        let rows: Vec<CaseTuple> = pairs
            .iter()
            .map(|(year, week)| ("AreaX", "MunA", "SvcA", "Dengue clásico", *week, *year, 1.0))
            .collect();
        let data = case_table(&rows);
        let output = apply_filters(&data, &FilterSelection::default()).unwrap();
        let ordered = week_year_pairs(&output);
        for window in ordered.windows(2) {
            let (prev, next) = (window[0], window[1]);
            assert!(prev <= next, "rows out of order: {prev:?} then {next:?}");
        }
        assert_eq!(ordered.len(), pairs.len());
    }
}
