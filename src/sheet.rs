// src/sheet.rs
//
// One study-sheet line per PET/CT scan. Column order is fixed and shared by
// the CSV export and the dashboard table.

use serde::Serialize;

pub const HEADERS: [&str; 10] = [
    "Study Name",
    "Scan Name",
    "Modality",
    "Animal Weight",
    "Tracer",
    "Activity",
    "Study Date",
    "Scan Time",
    "Injection Time",
    "Scanner",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(rename = "Study Name")]
    pub study_name: String,
    #[serde(rename = "Scan Name")]
    pub scan_name: String,
    #[serde(rename = "Modality")]
    pub modality: String,
    #[serde(rename = "Animal Weight")]
    pub animal_weight: String,
    #[serde(rename = "Tracer")]
    pub tracer: String,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Study Date")]
    pub study_date: String,
    #[serde(rename = "Scan Time")]
    pub scan_time: String,
    #[serde(rename = "Injection Time")]
    pub injection_time: String,
    #[serde(rename = "Scanner")]
    pub scanner: String,
}

/// Dose and units joined by one space. Both empty gives `" "`.
pub fn format_activity(dose: &str, units: &str) -> String {
    join!(dose, " ", units)
}

impl Row {
    /// Cells in `HEADERS` order.
    pub fn cells(&self) -> [&str; 10] {
        [
            &self.study_name,
            &self.scan_name,
            &self.modality,
            &self.animal_weight,
            &self.tracer,
            &self.activity,
            &self.study_date,
            &self.scan_time,
            &self.injection_time,
            &self.scanner,
        ]
    }
}
