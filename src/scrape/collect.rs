// src/scrape/collect.rs
//
// list → fetch → extract → accumulate, one experiment at a time in listing
// order. Only a failed listing aborts the run.

use crate::{
    config::options::ExtractOptions,
    core::net::JsonSource,
    error::Result,
    progress::Progress,
    sheet::Row,
    specs::{experiment, experiments, pet_ct},
};

/// What a run produced, with the per-experiment bookkeeping the frontends show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: Vec<Row>,
    pub experiments: usize,
    /// Experiments whose label the filters rejected.
    pub filtered: usize,
    pub skipped: Vec<String>,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the study sheet for `project_id`.
///
/// Errors only when the experiment list itself can't be retrieved; the caller
/// should treat that as "no output". Experiments that can't be fetched or read
/// are reported through `progress` and skipped.
pub fn collect_study_sheet(
    source: &dyn JsonSource,
    project_id: &str,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    logf!("Run: project={project_id} filter={:?} split_only={}", opts.active_filter(), opts.split_only);

    let ids = match experiments::try_list(source, project_id) {
        Ok(ids) => ids,
        Err(e) => {
            loge!("Run: listing failed for {project_id}: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error retrieving experiments: {e}"));
                p.finish();
            }
            return Err(e);
        }
    };

    let mut summary = RunSummary { experiments: ids.len(), ..Default::default() };

    if ids.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No experiments found.");
            p.finish();
        }
        return Ok(summary);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    for (i, id) in ids.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.item_started(i + 1, id);
        }

        let Some(doc) = experiment::fetch(source, id, progress.as_deref_mut()) else {
            summary.skipped.push(id.clone());
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(id, "not available");
            }
            continue;
        };

        match pet_ct::extract_with(&doc, opts) {
            Ok(rows) => {
                if pet_ct::filtered_out(&doc, opts) {
                    summary.filtered += 1;
                } else if rows.is_empty() {
                    logf!("No PET/CT scans found in experiment {id}");
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, rows.len());
                }
                summary.rows.extend(rows);
            }
            Err(e) => {
                loge!("Unexpected error processing {id}: {e}");
                summary.skipped.push(id.clone());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &e.to_string());
                }
            }
        }
    }

    logf!(
        "Run: done experiments={} rows={} filtered={} skipped={}",
        summary.experiments,
        summary.rows.len(),
        summary.filtered,
        summary.skipped.len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(summary)
}
