// src/gui/components/options_panel.rs
//
// Left panel: optional connection form, label filters, Create Sheet.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Complete Study Sheet Builder");
    ui.label(egui::RichText::new(
        "Create a complete study sheet based on PET/CT data within an XNAT project.",
    ).italics());

    ui.separator();

    if app.state.gui.show_connection {
        connection_form(ui, app);
        ui.separator();
    }

    egui::CollapsingHeader::new("Options")
        .default_open(true)
        .show(ui, |ui| {
            ui.label("Experiment Prefix Filter");
            ui.add(egui::TextEdit::singleline(&mut app.state.gui.filter_text))
                .on_hover_text("Experiment label must contain this text to be included in study sheet.");

            ui.checkbox(&mut app.state.options.extract.split_only, "Only Include Split Data")
                .on_hover_text("Set to true if you wish to only include split experiments.");
        });

    ui.add_space(8.0);

    let ready = app.state.options.server.is_complete();
    let resp = ui.add_enabled(ready, egui::Button::new("Create Sheet"));
    if !ready {
        resp.on_disabled_hover_text("Server URL and project are required.");
    } else if resp.clicked() {
        actions::create_sheet(app);
    }
}

fn connection_form(ui: &mut egui::Ui, app: &mut App) {
    let server = &mut app.state.options.server;

    egui::Grid::new("connection").num_columns(2).show(ui, |ui| {
        ui.label("Server");
        ui.add(egui::TextEdit::singleline(&mut server.url).hint_text("https://xnat.example.org"));
        ui.end_row();

        ui.label("User");
        ui.text_edit_singleline(&mut server.user);
        ui.end_row();

        ui.label("Password");
        ui.add(egui::TextEdit::singleline(&mut server.password).password(true));
        ui.end_row();

        ui.label("Project");
        ui.text_edit_singleline(&mut server.project);
        ui.end_row();
    });
}
