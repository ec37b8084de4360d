//! PET/CT rows from one experiment document.
//!
//! Document shape (only what is read):
//! ```text
//! data_fields: { label, date, tracer/name, tracer/dose, tracer/dose/units,
//!                tracer/startTime, dcmPatientWeight, scanner/model }
//! children[0].items[]: { data_fields: { modality, type, startTime } }
//! ```
//!
//! Label filters run once per experiment, before any scan is looked at.
//! Study-level fields are optional and default to `""`. A scan is kept when
//! its modality lower-cases to `pt`, `pet` or `ct` and it has a `type`.
//! A missing `label` or scan list fails the whole experiment with an
//! `ExtractError`; a malformed scan entry is skipped.

use serde_json::Value;

use crate::config::consts::{PET_CT_MODALITIES, SPLIT_MARKER};
use crate::config::options::ExtractOptions;
use crate::core::json::{array, member, object, text_opt, text_or_empty, value_text, Object};
use crate::error::ExtractError;
use crate::sheet::{format_activity, Row};

/// Study-level values shared by every row of one experiment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Study {
    name: String,
    date: String,
    tracer: String,
    dose: String,
    dose_units: String,
    injection_time: String,
    weight: String,
    scanner: String,
}

impl Study {
    fn read(label: String, fields: &Object) -> Self {
        Self {
            name: label,
            date: text_or_empty(fields, "date"),
            tracer: text_or_empty(fields, "tracer/name"),
            dose: text_or_empty(fields, "tracer/dose"),
            dose_units: text_or_empty(fields, "tracer/dose/units"),
            injection_time: text_or_empty(fields, "tracer/startTime"),
            weight: text_or_empty(fields, "dcmPatientWeight"),
            scanner: text_or_empty(fields, "scanner/model"),
        }
    }

    fn row(&self, scan_name: String, modality: String, scan_time: String) -> Row {
        Row {
            study_name: self.name.clone(),
            scan_name,
            modality,
            animal_weight: self.weight.clone(),
            tracer: self.tracer.clone(),
            activity: format_activity(&self.dose, &self.dose_units),
            study_date: self.date.clone(),
            scan_time,
            injection_time: self.injection_time.clone(),
            scanner: self.scanner.clone(),
        }
    }
}

pub fn is_pet_ct(modality: &str) -> bool {
    PET_CT_MODALITIES.contains(&modality)
}

/// Does `label` pass both label filters?
pub fn label_passes(label: &str, required_substring: Option<&str>, require_split_marker: bool) -> bool {
    if let Some(needle) = required_substring {
        if !label.contains(needle) {
            return false;
        }
    }
    if require_split_marker && !label.to_lowercase().contains(SPLIT_MARKER) {
        return false;
    }
    true
}

/// Rows for every PET/CT scan in `doc`, or an empty list when the label is
/// filtered out.
pub fn extract_rows(
    doc: &Value,
    required_substring: Option<&str>,
    require_split_marker: bool,
) -> Result<Vec<Row>, ExtractError> {
    let root = object(doc, "experiment")?;
    let fields = object(member(root, "data_fields", "data_fields")?, "data_fields")?;
    let label = value_text(member(fields, "label", "data_fields.label")?);

    if !label_passes(&label, required_substring, require_split_marker) {
        return Ok(Vec::new());
    }

    let study = Study::read(label, fields);

    let children = array(member(root, "children", "children")?, "children")?;
    let first = object(children.first().ok_or(ExtractError::Missing("children[0]"))?, "children[0]")?;
    let scans = array(member(first, "items", "children[0].items")?, "children[0].items")?;

    let mut rows = Vec::new();
    for (i, scan) in scans.iter().enumerate() {
        let Some(scan_fields) = scan.get("data_fields").and_then(Value::as_object) else {
            logd!("{}: scan #{i} has no data_fields, skipping", study.name);
            continue;
        };

        let Some(modality) = text_opt(scan_fields, "modality") else { continue };
        let modality = modality.to_lowercase();
        if !is_pet_ct(&modality) {
            continue;
        }

        let Some(scan_name) = text_opt(scan_fields, "type") else { continue };
        let scan_time = text_or_empty(scan_fields, "startTime");

        rows.push(study.row(scan_name, modality, scan_time));
    }

    Ok(rows)
}

/// `extract_rows` driven by the user's options.
pub fn extract_with(doc: &Value, opts: &ExtractOptions) -> Result<Vec<Row>, ExtractError> {
    extract_rows(doc, opts.active_filter(), opts.split_only)
}

/// True when `doc` has a label and the label filters reject it.
pub fn filtered_out(doc: &Value, opts: &ExtractOptions) -> bool {
    doc.get("data_fields")
        .and_then(|f| f.get("label"))
        .map(|l| !label_passes(&value_text(l), opts.active_filter(), opts.split_only))
        .unwrap_or(false)
}
