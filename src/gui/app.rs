// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::ServerOptions,
        state::{AppState, GuiState},
    },
    sheet::Row,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Complete Study Sheet Builder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last built sheet
    pub rows: Vec<Row>,
    pub messages: Vec<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.options.server = ServerOptions::from_env();

        // Launched outside an XNAT project: let the user type the connection.
        let show_connection = !state.options.server.is_complete();
        state.gui = GuiState { show_connection, ..GuiState::default() };

        logf!(
            "Init: server={} project={:?} connection_form={}",
            state.options.server.base_url(),
            state.options.server.project,
            show_connection
        );

        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            rows: Vec::new(),
            messages: Vec::new(),
            status: Arc::new(Mutex::new(s!(
                "Please set your optional parameters then click 'Create Sheet.'"
            ))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap().clone()
    }

    /// Mirror the filter text box → options.extract
    pub fn sync_filter_into_options(&mut self) {
        let text = self.state.gui.filter_text.clone();
        self.state.options.extract.set_filter_text(&text);
    }

    /// Mirror the output text box → options.export
    pub fn sync_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("options")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                crate::gui::components::options_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            ui.label(self.status_text());
            for m in &self.messages {
                ui.label(egui::RichText::new(m).weak());
            }

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
