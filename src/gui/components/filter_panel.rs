// src/gui/components/filter_panel.rs
//
// Left sidebar: neighborhood and year multi-selects. Applies changes
// directly to `app` and rebuilds the view.

use eframe::egui::{self, RichText};

use crate::gui::app::App;

fn all_none_buttons(ui: &mut egui::Ui) -> Option<bool> {
    let mut pick = None;
    ui.horizontal(|ui| {
        if ui.small_button("All").clicked() { pick = Some(true); }
        if ui.small_button("None").clicked() { pick = Some(false); }
    });
    pick
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters:");
    ui.separator();

    // Match the scroll bar look of the detail table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut changed = false;
    let list_h = (ui.available_height() - 160.0).max(120.0);

    /* ---------- Neighborhoods ---------- */

    ui.label(RichText::new("Select Location:").strong());
    match all_none_buttons(ui) {
        Some(true) => {
            app.state.gui.selection.neighborhoods = app.options.neighborhoods.iter().cloned().collect();
            changed = true;
        }
        Some(false) => {
            app.state.gui.selection.neighborhoods.clear();
            changed = true;
        }
        None => {}
    }

    egui::ScrollArea::vertical()
        .id_salt("neighborhoods_scroll")
        .max_height(list_h * 0.75)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            for name in &app.options.neighborhoods {
                let mut on = app.state.gui.selection.neighborhoods.contains(name);
                if ui.checkbox(&mut on, name).changed() {
                    app.state.gui.selection.toggle_neighborhood(name);
                    changed = true;
                }
            }
        });

    ui.separator();

    /* ---------- Years ---------- */

    ui.label(RichText::new("Select Year:").strong());
    match all_none_buttons(ui) {
        Some(true) => {
            app.state.gui.selection.years = app.options.years.iter().copied().collect();
            changed = true;
        }
        Some(false) => {
            app.state.gui.selection.years.clear();
            changed = true;
        }
        None => {}
    }

    egui::ScrollArea::vertical()
        .id_salt("years_scroll")
        .max_height(list_h * 0.25)
        .show(ui, |ui| {
            for &year in &app.options.years {
                let mut on = app.state.gui.selection.years.contains(&year);
                if ui.checkbox(&mut on, year.to_string()).changed() {
                    app.state.gui.selection.toggle_year(year);
                    changed = true;
                }
            }
        });

    if changed {
        app.rebuild_view();
        let sel = &app.state.gui.selection;
        logf!(
            "UI: Selection changed ({} neighborhoods, {} years) → {} records",
            sel.neighborhoods.len(),
            sel.years.len(),
            app.view.records.len()
        );
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Reload data").clicked() {
            app.force_reload();
        }
    });
    ui.label(RichText::new(&app.status).small());
}
