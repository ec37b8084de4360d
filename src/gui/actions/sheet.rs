use crate::{
    core::net::XnatClient,
    gui::{app::App, progress::GuiProgress},
    scrape,
};

/// Build the sheet for the configured project and show it.
pub fn create_sheet(app: &mut App) {
    app.sync_filter_into_options();
    app.messages.clear();

    let server = app.state.options.server.clone();
    let extract = app.state.options.extract.clone();

    logf!("Sheet: Begin project={} extract={:?}", server.project, extract);

    let client = match XnatClient::from_options(&server) {
        Ok(c) => c,
        Err(e) => {
            loge!("Sheet: client setup failed: {e}");
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the fetching happens ←
    let res = scrape::collect_study_sheet(&client, server.project.trim(), &extract, Some(&mut prog));
    app.messages = prog.into_messages();

    match res {
        Ok(summary) => {
            logf!("Sheet: OK rows={} skipped={}", summary.rows.len(), summary.skipped.len());
            if summary.experiments == 0 {
                app.status("No experiments found.");
            } else if summary.is_empty() {
                app.status("No PET/CT scan data found in project");
            } else {
                app.status(format!(
                    "Found {} PET/CT scans in {} experiments",
                    summary.rows.len(),
                    summary.experiments
                ));
            }
            app.rows = summary.rows;
        }
        Err(e) => {
            loge!("Sheet: Error: {e}");
            app.rows.clear();
            app.status(format!("Error connecting to project {}: {e}", server.project));
        }
    }
}
