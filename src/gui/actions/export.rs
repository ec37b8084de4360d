use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    app.sync_out_path();

    if app.rows.is_empty() {
        app.status("Nothing to export");
        return;
    }

    match file::write_export(&app.state.options.export, &app.rows) {
        Ok(path) => app.status(format!("Data written to: {}", path.display())),
        Err(e) => {
            loge!("Export: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}
