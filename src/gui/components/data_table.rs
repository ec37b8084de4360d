// src/gui/components/data_table.rs
//
// Draws the study sheet. Purely a view over `app.rows`.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::sheet::HEADERS;

// Study name, scan name and scanner tend to be long; the rest are short.
const WIDTHS: [f32; HEADERS.len()] = [180.0, 140.0, 70.0, 100.0, 80.0, 110.0, 100.0, 90.0, 100.0, 120.0];

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.rows.is_empty() {
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("sheet_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);

            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in HEADERS {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, app.rows.len(), |mut row| {
                        let r = &app.rows[row.index()];
                        for cell in r.cells() {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
