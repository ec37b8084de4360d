//
// PET/CT row extraction over whole experiment documents.
//
use serde_json::{json, Value};
use study_sheet::specs::pet_ct::extract_rows;
use study_sheet::error::ExtractError;

fn experiment(label: &str, scans: Value) -> Value {
    json!({
        "data_fields": {
            "label": label,
            "date": "2025-01-14",
            "tracer/name": "18F-FDG",
            "tracer/dose": "9.8",
            "tracer/dose/units": "MBq",
            "tracer/startTime": "11:02:10",
            "dcmPatientWeight": "0.0231",
            "scanner/model": "Beta-Cube"
        },
        "children": [ { "field": "scans/scan", "items": scans } ]
    })
}

fn scan(modality: &str, kind: &str) -> Value {
    json!({ "data_fields": { "modality": modality, "type": kind, "startTime": "11:30:00" } })
}

#[test]
fn split_study_with_matching_filter() {
    let doc = experiment("Study_A_split_01", json!([scan("PT", "WB_PET")]));
    let rows = extract_rows(&doc, Some("Study_A"), true).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].modality, "pt");
    assert_eq!(rows[0].scan_name, "WB_PET");
    assert_eq!(rows[0].study_name, "Study_A_split_01");
}

#[test]
fn split_only_rejects_unsplit_label() {
    let doc = experiment("Study_B_01", json!([scan("PT", "WB_PET")]));
    assert!(extract_rows(&doc, None, true).unwrap().is_empty());
}

#[test]
fn label_without_substring_yields_nothing() {
    let doc = experiment("Other_study", json!([scan("PT", "A"), scan("CT", "B"), scan("PET", "C")]));
    assert!(extract_rows(&doc, Some("Study_A"), false).unwrap().is_empty());
    assert!(extract_rows(&doc, Some("Study_A"), true).unwrap().is_empty());
}

#[test]
fn only_pet_ct_modalities_survive() {
    let doc = experiment("S", json!([scan("MR", "T2"), scan("ct", "CT_AC")]));
    let rows = extract_rows(&doc, None, false).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scan_name, "CT_AC");
    assert_eq!(rows[0].modality, "ct");

    let doc = experiment("S", json!([scan("OT", "x"), scan("SPECT", "y"), scan("PETCT", "z")]));
    assert!(extract_rows(&doc, None, false).unwrap().is_empty());
}

#[test]
fn missing_children_is_contained() {
    let doc = json!({ "data_fields": { "label": "Study_A_split_01" } });
    assert_eq!(extract_rows(&doc, Some("Study_A"), true), Err(ExtractError::Missing("children")));
}

#[test]
fn missing_study_fields_become_empty_strings() {
    let doc = json!({
        "data_fields": { "label": "Bare" },
        "children": [ { "items": [ { "data_fields": { "modality": "PT", "type": "Dyn" } } ] } ]
    });
    let rows = extract_rows(&doc, None, false).unwrap();
    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.study_date, "");
    assert_eq!(r.tracer, "");
    assert_eq!(r.animal_weight, "");
    assert_eq!(r.injection_time, "");
    assert_eq!(r.scanner, "");
    assert_eq!(r.scan_time, "");
    assert_eq!(r.activity, " ");
}

#[test]
fn extraction_is_repeatable() {
    let doc = experiment("Study_A_split_01", json!([scan("PT", "WB_PET"), scan("CT", "CT")]));
    let a = extract_rows(&doc, Some("Study"), true).unwrap();
    let b = extract_rows(&doc, Some("Study"), true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn scan_order_is_preserved() {
    let doc = experiment("S", json!([scan("CT", "first"), scan("MR", "skip"), scan("PT", "second")]));
    let names: Vec<String> = extract_rows(&doc, None, false)
        .unwrap()
        .into_iter()
        .map(|r| r.scan_name)
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}
