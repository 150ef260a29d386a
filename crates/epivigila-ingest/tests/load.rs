//! End-to-end loader tests over real files on disk.

use std::fs;
use std::path::PathBuf;

use epivigila_ingest::{SourceFormatError, load_sources};
use epivigila_model::schema::{CASE_COUNT, EPI_YEAR};

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn concatenates_files_across_schema_variants() {
    let dir = tempfile::tempdir().unwrap();
    // Raw SIGSA layout with identifier column.
    let sigsa = write_csv(
        &dir,
        "sigsa_2023.csv",
        "Área de Salud,Municipio,Servicio de Salud,Idcie10,Descripción Cie10,Semana,Año,Métrica\n\
         Guatemala Central,Mixco,CS Mixco,A90,Dengue clásico,5,2023,10\n",
    );
    // Reworked report layout without identifier column.
    let reporte = write_csv(
        &dir,
        "reporte_2024.csv",
        "Área de Salud,Municipio,Servicio de Salud,Tipo de Dengue,Semana,Año,Número de casos\n\
         Guatemala Central,Mixco,CS Mixco,Dengue grave,3,2024,2\n\
         Guatemala Central,Villa Nueva,CS Villa Nueva,Dengue clásico,3,2024,7\n",
    );

    let unified = load_sources(&[sigsa, reporte]).unwrap();
    assert_eq!(unified.height(), 3);
    let years = unified.column(EPI_YEAR).unwrap().i64().unwrap();
    assert_eq!(years.get(0), Some(2023));
    assert_eq!(years.get(2), Some(2024));
    let counts = unified.column(CASE_COUNT).unwrap().f64().unwrap();
    assert_eq!(counts.get(0), Some(10.0));
}

#[test]
fn missing_required_column_aborts_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_csv(
        &dir,
        "good.csv",
        "Área de Salud,Municipio,Servicio de Salud,Tipo de Dengue,Semana,Año,Número de casos\n\
         AreaX,MunA,SvcA,Dengue clásico,1,2024,1\n",
    );
    let bad = write_csv(&dir, "bad.csv", "Municipio,Semana,Año\nMixco,1,2024\n");

    let error = load_sources(&[good, bad]).unwrap_err();
    assert!(matches!(error, SourceFormatError::MissingColumn { .. }));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "datos.txt", "whatever");
    let error = load_sources(&[path]).unwrap_err();
    assert!(matches!(error, SourceFormatError::UnsupportedSource { .. }));
}

#[test]
fn empty_source_list_is_a_prompt_not_a_crash() {
    let error = load_sources(&[]).unwrap_err();
    assert!(matches!(error, SourceFormatError::NoSources));
}

#[test]
fn exported_canonical_headers_reload_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "export.csv",
        "health_area,municipality,health_service,diagnosis_type,epi_week,epi_year,case_count\n\
         AreaX,MunA,SvcA,Dengue clásico,2,2024,4.0\n",
    );
    let unified = load_sources(std::slice::from_ref(&path)).unwrap();
    assert_eq!(unified.height(), 1);
}
