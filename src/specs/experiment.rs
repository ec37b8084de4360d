//! Single experiment document.
//!
//! Response shape: `{ "items": [ <experiment document>, ... ] }`; only the first
//! item is used.

use serde_json::Value;

use crate::core::net::JsonSource;
use crate::progress::Progress;

pub fn path_for(experiment_id: &str) -> String {
    format!("/data/experiments/{}", experiment_id)
}

/// Take `items[0]` out of the response, if it has one.
pub fn unwrap_items(mut data: Value) -> Option<Value> {
    match data.get_mut("items")?.as_array_mut()? {
        items if items.is_empty() => None,
        items => Some(items.swap_remove(0)),
    }
}

/// Fetch one experiment. `None` means "skip it": either the response had no
/// `items`, or the request failed (logged and reported).
pub fn fetch(
    source: &dyn JsonSource,
    experiment_id: &str,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Option<Value> {
    match source.get_json(&path_for(experiment_id)) {
        Ok(data) => {
            let doc = unwrap_items(data);
            if doc.is_none() {
                logd!("Experiment {experiment_id}: response has no items");
            }
            doc
        }
        Err(e) => {
            loge!("Error downloading {experiment_id}: {e}");
            if let Some(p) = progress {
                p.log(&format!("Error downloading {experiment_id}: {e}"));
            }
            None
        }
    }
}
