use crate::{file, gui::app::App};

/// Export text for the clipboard, or `None` (with a status) if there's nothing.
pub fn copy(app: &mut App) -> Option<String> {
    if app.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return None;
    }

    match file::to_export_string(&app.state.options.export, &app.rows) {
        Ok(txt) => {
            logf!("Copy: rows={}", app.rows.len());
            app.status("Copied to clipboard");
            Some(txt)
        }
        Err(e) => {
            loge!("Copy: {e}");
            app.status(format!("Copy failed: {e}"));
            None
        }
    }
}
