//! Experiment listing for a project.
//!
//! Response shape: `{ "ResultSet": { "Result": [ { "ID": "..." }, ... ] } }`.
//! The whole list arrives in one response; there is no paging.

use serde_json::Value;

use crate::core::net::JsonSource;
use crate::error::Result;
use crate::progress::Progress;

pub fn path_for(project_id: &str) -> String {
    format!("/data/projects/{}/experiments", project_id)
}

/// Pull the ids out of a listing response. Missing `ResultSet.Result` means
/// an empty project; entries without a string `ID` are skipped.
pub fn parse_ids(data: &Value) -> Vec<String> {
    let Some(results) = data
        .get("ResultSet")
        .and_then(|rs| rs.get("Result"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    results
        .iter()
        .filter_map(|r| r.get("ID").and_then(Value::as_str))
        .map(String::from)
        .collect()
}

/// Listing that surfaces transport errors to the caller.
pub fn try_list(source: &dyn JsonSource, project_id: &str) -> Result<Vec<String>> {
    let data = source.get_json(&path_for(project_id))?;
    let ids = parse_ids(&data);
    logf!("Found {} experiments in {}", ids.len(), project_id);
    Ok(ids)
}

/// Listing that never fails: errors are logged, reported, and turned into an
/// empty list.
pub fn list_experiments(
    source: &dyn JsonSource,
    project_id: &str,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<String> {
    match try_list(source, project_id) {
        Ok(ids) => ids,
        Err(e) => {
            loge!("Error retrieving experiments for {project_id}: {e}");
            if let Some(p) = progress {
                p.log(&format!("Error retrieving experiments: {e}"));
            }
            Vec::new()
        }
    }
}
