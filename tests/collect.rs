//
// Driver behavior against an in-memory server.
//
use std::collections::HashMap;

use serde_json::{json, Value};
use study_sheet::config::options::ExtractOptions;
use study_sheet::core::net::JsonSource;
use study_sheet::error::{Error, Result};
use study_sheet::progress::Progress;
use study_sheet::scrape::collect_study_sheet;

#[derive(Default)]
struct FakeServer {
    routes: HashMap<String, Value>,
}

impl FakeServer {
    fn with(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), body);
        self
    }
}

impl JsonSource for FakeServer {
    fn get_json(&self, path: &str) -> Result<Value> {
        self.routes
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Status { status: 404, url: path.to_string() })
    }
}

#[derive(Default)]
struct Recorder {
    started: Vec<String>,
    failed: Vec<String>,
    logs: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.logs.push(msg.to_string()); }
    fn item_started(&mut self, _index: usize, id: &str) { self.started.push(id.to_string()); }
    fn item_failed(&mut self, id: &str, _reason: &str) { self.failed.push(id.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn listing(ids: &[&str]) -> Value {
    let result: Vec<Value> = ids.iter().map(|id| json!({ "ID": id })).collect();
    json!({ "ResultSet": { "Result": result } })
}

fn experiment(label: &str, modalities: &[&str]) -> Value {
    let scans: Vec<Value> = modalities
        .iter()
        .enumerate()
        .map(|(i, m)| json!({ "data_fields": { "modality": m, "type": format!("scan{i}") } }))
        .collect();
    json!({ "items": [ {
        "data_fields": { "label": label, "tracer/dose": "5", "tracer/dose/units": "MBq" },
        "children": [ { "items": scans } ]
    } ] })
}

#[test]
fn rows_accumulate_in_listing_order() {
    let server = FakeServer::default()
        .with("/data/projects/P1/experiments", listing(&["E2", "E1"]))
        .with("/data/experiments/E1", experiment("Study_1", &["PT"]))
        .with("/data/experiments/E2", experiment("Study_2", &["CT", "MR", "PET"]));

    let mut rec = Recorder::default();
    let summary = collect_study_sheet(&server, "P1", &ExtractOptions::default(), Some(&mut rec)).unwrap();

    let labels: Vec<&str> = summary.rows.iter().map(|r| r.study_name.as_str()).collect();
    assert_eq!(labels, vec!["Study_2", "Study_2", "Study_1"]);
    assert_eq!(summary.experiments, 2);
    assert!(summary.skipped.is_empty());
    assert_eq!(rec.started, vec!["E2", "E1"]);
    assert!(rec.finished);
    assert_eq!(summary.rows[0].activity, "5 MBq");
}

#[test]
fn failed_experiments_are_skipped_not_fatal() {
    let server = FakeServer::default()
        .with("/data/projects/P1/experiments", listing(&["E1", "E404", "E_BAD", "E_EMPTY", "E3"]))
        .with("/data/experiments/E1", experiment("A", &["PT"]))
        .with("/data/experiments/E_BAD", json!({ "items": [ { "data_fields": { "label": "B" } } ] }))
        .with("/data/experiments/E_EMPTY", json!({ "no_items": true }))
        .with("/data/experiments/E3", experiment("C", &["CT"]));

    let mut rec = Recorder::default();
    let summary = collect_study_sheet(&server, "P1", &ExtractOptions::default(), Some(&mut rec)).unwrap();

    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.skipped, vec!["E404", "E_BAD", "E_EMPTY"]);
    assert_eq!(rec.failed, summary.skipped);

    // the transport error reaches the user, the missing-items case is silent
    assert_eq!(rec.logs.len(), 1);
    assert!(rec.logs[0].starts_with("Error downloading E404:"));
    assert!(rec.logs[0].contains("404"));
}

#[test]
fn listing_failure_is_fatal() {
    let server = FakeServer::default();
    let mut rec = Recorder::default();
    let res = collect_study_sheet(&server, "NOPE", &ExtractOptions::default(), Some(&mut rec));
    assert!(matches!(res, Err(Error::Status { status: 404, .. })));
    assert!(rec.logs[0].starts_with("Error retrieving experiments:"));
    assert!(rec.finished);
}

#[test]
fn passing_experiment_without_pet_ct_is_not_filtered() {
    let server = FakeServer::default()
        .with("/data/projects/P1/experiments", listing(&["E1"]))
        .with("/data/experiments/E1", experiment("Mouse_1", &["MR"]));
    let summary = collect_study_sheet(&server, "P1", &ExtractOptions::default(), None).unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.filtered, 0);
    assert!(summary.skipped.is_empty());
}

#[test]
fn empty_project_is_ok_and_empty() {
    let server = FakeServer::default().with("/data/projects/P1/experiments", json!({}));
    let summary = collect_study_sheet(&server, "P1", &ExtractOptions::default(), None).unwrap();
    assert_eq!(summary.experiments, 0);
    assert!(summary.is_empty());
}

#[test]
fn filters_apply_per_experiment() {
    let server = FakeServer::default()
        .with("/data/projects/P1/experiments", listing(&["E1", "E2", "E3"]))
        .with("/data/experiments/E1", experiment("Mouse_split_1", &["PT"]))
        .with("/data/experiments/E2", experiment("Mouse_2", &["PT"]))
        .with("/data/experiments/E3", experiment("Rat_SPLIT_3", &["PT"]));

    let opts = ExtractOptions::new(Some("Mouse".into()), true);
    let summary = collect_study_sheet(&server, "P1", &opts, None).unwrap();
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].study_name, "Mouse_split_1");
    assert_eq!(summary.filtered, 2);
    assert!(summary.skipped.is_empty());
}

#[test]
fn lenient_listing_swallows_errors() {
    let server = FakeServer::default();
    let mut rec = Recorder::default();
    let ids = study_sheet::specs::experiments::list_experiments(&server, "P1", Some(&mut rec));
    assert!(ids.is_empty());
    assert_eq!(rec.logs.len(), 1);
}
