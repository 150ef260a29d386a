//! Canonical case-record schema and source-column vocabulary.
//!
//! Source spreadsheets arrived in three slightly different naming
//! conventions over the years (raw SIGSA exports with CIE-10 labels, and two
//! reworked report layouts). All of them are funneled through one synonym
//! table here so the loader is a single deterministic function of recognized
//! labels rather than a code path per variant.

/// Normalized column name for the health area dimension.
pub const HEALTH_AREA: &str = "health_area";
/// Normalized column name for the municipality dimension.
pub const MUNICIPALITY: &str = "municipality";
/// Normalized column name for the health service dimension.
pub const HEALTH_SERVICE: &str = "health_service";
/// Normalized column name for the dengue subtype description.
pub const DIAGNOSIS_TYPE: &str = "diagnosis_type";
/// Normalized column name for the epidemiological week (1-53).
pub const EPI_WEEK: &str = "epi_week";
/// Normalized column name for the epidemiological year.
pub const EPI_YEAR: &str = "epi_year";
/// Normalized column name for the case count metric.
pub const CASE_COUNT: &str = "case_count";

/// A column of the unified case table, in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalColumn {
    HealthArea,
    Municipality,
    HealthService,
    DiagnosisType,
    EpiWeek,
    EpiYear,
    CaseCount,
}

impl CanonicalColumn {
    /// Every canonical column, in display order. All of them are required in
    /// a source file after normalization; only the CIE-10 identifier column
    /// (see [`is_identifier_label`]) is optional, and it is dropped.
    pub const ALL: [CanonicalColumn; 7] = [
        CanonicalColumn::HealthArea,
        CanonicalColumn::Municipality,
        CanonicalColumn::HealthService,
        CanonicalColumn::DiagnosisType,
        CanonicalColumn::EpiWeek,
        CanonicalColumn::EpiYear,
        CanonicalColumn::CaseCount,
    ];

    /// The normalized column name used in the unified table.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalColumn::HealthArea => HEALTH_AREA,
            CanonicalColumn::Municipality => MUNICIPALITY,
            CanonicalColumn::HealthService => HEALTH_SERVICE,
            CanonicalColumn::DiagnosisType => DIAGNOSIS_TYPE,
            CanonicalColumn::EpiWeek => EPI_WEEK,
            CanonicalColumn::EpiYear => EPI_YEAR,
            CanonicalColumn::CaseCount => CASE_COUNT,
        }
    }

    /// Source labels recognized for this column, covering the three
    /// historical schema variants. Matching is case-insensitive and
    /// whitespace-folded; accent-stripped spellings are listed explicitly.
    pub fn source_synonyms(self) -> &'static [&'static str] {
        match self {
            CanonicalColumn::HealthArea => &["Área de Salud", "Area de Salud"],
            CanonicalColumn::Municipality => &["Municipio"],
            CanonicalColumn::HealthService => &["Servicio de Salud"],
            CanonicalColumn::DiagnosisType => &[
                "Tipo de Dengue",
                "Descripción Cie10",
                "Descripcion Cie10",
            ],
            CanonicalColumn::EpiWeek => &["Semana"],
            CanonicalColumn::EpiYear => &["Año", "Ano", "Anio"],
            CanonicalColumn::CaseCount => &[
                "Número de casos",
                "Numero de casos",
                "Métrica",
                "Metrica",
            ],
        }
    }

    /// Resolve a raw source header to its canonical column, if recognized.
    ///
    /// Canonical names themselves are accepted too, so a previously exported
    /// CSV re-ingests without a special case.
    pub fn from_source_label(label: &str) -> Option<Self> {
        let folded = fold_label(label);
        Self::ALL.into_iter().find(|column| {
            fold_label(column.as_str()) == folded
                || column
                    .source_synonyms()
                    .iter()
                    .any(|synonym| fold_label(synonym) == folded)
        })
    }
}

/// True for the optional CIE-10 diagnosis identifier column, which is
/// dropped when present and never required.
pub fn is_identifier_label(label: &str) -> bool {
    fold_label(label) == "idcie10"
}

/// Case-fold a header label and collapse internal whitespace so that
/// `"  Área de  Salud "` and `"área de salud"` compare equal.
fn fold_label(label: &str) -> String {
    let mut folded = String::with_capacity(label.len());
    for part in label.split_whitespace() {
        if !folded.is_empty() {
            folded.push(' ');
        }
        for ch in part.chars() {
            folded.extend(ch.to_lowercase());
        }
    }
    folded
}
