//! Filter selections and selector option lists.

use serde::{Deserialize, Serialize};

use crate::schema::{HEALTH_AREA, HEALTH_SERVICE, MUNICIPALITY};

/// Sentinel diagnosis value that collapses every diagnosis category into one
/// summed series. Selecting it is exclusive: individual diagnosis selections
/// are ignored once it is present.
pub const TOTAL_DIAGNOSIS: &str = "Total";

/// User-selected value subsets, one per filterable dimension.
///
/// An empty vector means "no filter on this dimension": every row passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub health_areas: Vec<String>,
    pub municipalities: Vec<String>,
    pub health_services: Vec<String>,
    pub diagnoses: Vec<String>,
}

impl FilterSelection {
    /// True when no dimension carries a selection at all.
    pub fn is_empty(&self) -> bool {
        self.health_areas.is_empty()
            && self.municipalities.is_empty()
            && self.health_services.is_empty()
            && self.diagnoses.is_empty()
    }

    /// True when the [`TOTAL_DIAGNOSIS`] sentinel is among the selected
    /// diagnosis values.
    pub fn total_mode(&self) -> bool {
        self.diagnoses.iter().any(|value| value == TOTAL_DIAGNOSIS)
    }

    /// The three plain membership dimensions paired with their selections,
    /// in canonical column order. Diagnosis handling is modal and stays
    /// separate.
    pub fn dimension_filters(&self) -> [(&'static str, &[String]); 3] {
        [
            (HEALTH_AREA, self.health_areas.as_slice()),
            (MUNICIPALITY, self.municipalities.as_slice()),
            (HEALTH_SERVICE, self.health_services.as_slice()),
        ]
    }
}

/// Distinct sorted values per dimension, for presentation as selectable
/// options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOptions {
    pub health_areas: Vec<String>,
    pub municipalities: Vec<String>,
    pub health_services: Vec<String>,
    pub diagnoses: Vec<String>,
}

impl SelectorOptions {
    /// Diagnosis choices as presented to the user: the `Total` sentinel
    /// first, then the observed diagnosis types.
    pub fn diagnosis_choices(&self) -> Vec<String> {
        let mut choices = Vec::with_capacity(self.diagnoses.len() + 1);
        choices.push(TOTAL_DIAGNOSIS.to_string());
        choices.extend(self.diagnoses.iter().cloned());
        choices
    }
}
