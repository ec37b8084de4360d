use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use study_sheet::specs::pet_ct;

// One large experiment: mixed modalities, some scans missing fields.
fn sample_doc(scans: usize) -> Value {
    let modalities = ["PT", "CT", "MR", "OT", "pet"];
    let items: Vec<Value> = (0..scans)
        .map(|i| {
            if i % 17 == 0 {
                json!({ "data_fields": { "type": format!("scan_{i}") } })
            } else {
                json!({ "data_fields": {
                    "modality": modalities[i % modalities.len()],
                    "type": format!("scan_{i}"),
                    "startTime": "12:00:00"
                } })
            }
        })
        .collect();

    json!({
        "data_fields": {
            "label": "Bench_Study_split_01",
            "date": "2025-06-01",
            "tracer/name": "FDG",
            "tracer/dose": 11.2,
            "tracer/dose/units": "MBq",
            "tracer/startTime": "11:40:00",
            "dcmPatientWeight": "0.03",
            "scanner/model": "Inveon"
        },
        "children": [ { "items": items } ]
    })
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_doc(2_000);

    c.bench_function("extract_rows_pass", |b| {
        b.iter(|| {
            let rows = pet_ct::extract_rows(black_box(&doc), Some("Bench"), true).unwrap_or_default();
            black_box(rows.len())
        })
    });

    c.bench_function("extract_rows_filtered_out", |b| {
        b.iter(|| {
            let rows = pet_ct::extract_rows(black_box(&doc), Some("Other"), false).unwrap_or_default();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
