//! CSV export round-trip: re-ingesting an export reproduces the table.

use polars::prelude::{DataFrame, NamedFrom, Series};

use epivigila_model::schema::{
    CASE_COUNT, DIAGNOSIS_TYPE, EPI_WEEK, EPI_YEAR, HEALTH_AREA, HEALTH_SERVICE, MUNICIPALITY,
};
use epivigila_report::write_csv_file;

fn display_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new(HEALTH_AREA.into(), vec!["Guatemala Central", "Zacapa"]).into(),
        Series::new(MUNICIPALITY.into(), vec!["Mixco", "Zacapa"]).into(),
        Series::new(HEALTH_SERVICE.into(), vec!["CS Mixco", "CS Zacapa"]).into(),
        Series::new(DIAGNOSIS_TYPE.into(), vec!["Dengue clásico", "Dengue grave"]).into(),
        Series::new(EPI_WEEK.into(), vec![2i64, 10]).into(),
        Series::new(EPI_YEAR.into(), vec![2024i64, 2024]).into(),
        Series::new(CASE_COUNT.into(), vec![4.0f64, 1.0]).into(),
    ])
    .unwrap()
}

#[test]
fn reingesting_the_export_reproduces_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filtered_report.csv");
    let original = display_frame();
    write_csv_file(&original, &path).unwrap();

    let reloaded = epivigila_ingest::load_sources(&[path]).unwrap();
    assert!(
        reloaded.equals(&original),
        "round-tripped frame differs:\n{reloaded:?}\nvs\n{original:?}"
    );
}
