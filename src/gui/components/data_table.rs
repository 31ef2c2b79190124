// src/gui/components/data_table.rs
//
// Draws the detail table from preformatted display rows. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::display::DisplayRow;

/// Starting widths, in `DisplayRow::HEADERS` order.
const WIDTHS: [f32; 7] = [220.0, 56.0, 150.0, 90.0, 280.0, 90.0, 200.0];

/// Zip and the two dates are centred; text columns hug the left edge.
const CENTERED: [bool; 7] = [false, true, false, true, false, true, false];

pub fn draw(ui: &mut egui::Ui, rows: &[DisplayRow]) {
    // Reserve space for scroll bars instead of floating them over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("detail_table_hscroll")
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
                    for (ci, title) in DisplayRow::HEADERS.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = RichText::new(*title).strong();
                            if CENTERED[ci] {
                                ui.centered_and_justified(|ui| { ui.label(text); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(data) = rows.get(row.index()) else { return };
                        for (ci, cell) in data.cells().into_iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if CENTERED[ci] {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
