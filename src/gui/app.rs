// src/gui/app.rs
use std::sync::Arc;

use eframe::egui::{self, Color32, RichText};

use crate::{
    aggregate::{counts_by_neighborhood, NeighborhoodCount},
    config::{
        consts::APP_TITLE,
        state::{DashboardState, Selection},
    },
    csv::Delim,
    display::{display_to_string, for_display, DisplayRow},
    filter::{filter, filter_options, FilterOptions},
    loader::DatasetLoader,
    metrics::{metrics, Metrics},
    record::RecordSet,
};

use super::components::{bar_chart, data_table, filter_panel, metric_cards};

pub fn run(options: eframe::NativeOptions, state: DashboardState) -> Result<(), eframe::Error> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )
}

/// Everything the central panel draws for the current selection.
#[derive(Clone, Debug, Default)]
pub struct View {
    pub records: RecordSet,
    pub metrics: Metrics,
    pub counts: Vec<NeighborhoodCount>,
    pub rows: Vec<DisplayRow>,
}

impl View {
    pub fn build(data: &RecordSet, sel: &Selection) -> Self {
        let records = filter(
            data,
            sel.neighborhoods.iter().map(String::as_str),
            sel.years.iter().copied(),
        );
        Self {
            metrics: metrics(&records),
            counts: counts_by_neighborhood(&records),
            rows: for_display(&records),
            records,
        }
    }
}

pub struct App {
    pub state: DashboardState,
    loader: DatasetLoader,

    // canonical dataset (None until a load succeeds)
    pub data: Option<Arc<RecordSet>>,
    pub load_error: Option<String>,

    pub options: FilterOptions,
    pub view: View,
    pub status: String,
}

impl App {
    pub fn new(state: DashboardState) -> Self {
        let mut app = Self {
            state,
            loader: DatasetLoader::new(),
            data: None,
            load_error: None,
            options: FilterOptions::default(),
            view: View::default(),
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    /// (Re)load the source, reset the selection to everything and rebuild.
    pub fn reload(&mut self) {
        match self.loader.load(&self.state.load) {
            Ok(data) => {
                self.options = filter_options(&data);
                self.state.gui.selection = Selection::all_of(&self.options);
                logf!(
                    "Init: {} records, {} neighborhoods, {} years",
                    data.len(),
                    self.options.neighborhoods.len(),
                    self.options.years.len()
                );
                self.status = format!("Loaded {} records", data.len());
                self.data = Some(data);
                self.load_error = None;
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.status = s!("Load failed");
                self.load_error = Some(e.to_string());
                self.data = None;
                self.options = FilterOptions::default();
                self.state.gui.selection = Selection::default();
            }
        }
        self.rebuild_view();
    }

    /// Drop the cached dataset and read the source again.
    pub fn force_reload(&mut self) {
        self.loader.invalidate();
        self.reload();
    }

    pub fn rebuild_view(&mut self) {
        self.view = match &self.data {
            Some(data) => View::build(data, &self.state.gui.selection),
            None => View::default(),
        };
    }

    pub fn copy_table(&mut self, ctx: &egui::Context) {
        if self.view.rows.is_empty() {
            self.status = s!("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        }
        let text = display_to_string(&self.view.rows, true, Delim::Csv);
        ctx.copy_text(text);
        logf!("Copy: rows={}", self.view.rows.len());
        self.status = format!("Copied {} rows to clipboard", self.view.rows.len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new(APP_TITLE).size(26.0));
            ui.separator();

            if let Some(err) = &self.load_error {
                ui.colored_label(Color32::from_rgb(0xDC, 0x61, 0x49), format!("Could not load data: {err}"));
                return;
            }

            if self.view.records.is_empty() {
                ui.colored_label(
                    Color32::from_rgb(0xF0, 0xD2, 0x3C),
                    "No data available for the selected filters. Please adjust your selection.",
                );
                return;
            }

            metric_cards::draw(ui, &self.view.metrics);
            ui.add_space(8.0);
            bar_chart::draw(ui, &self.view.counts);
            ui.separator();

            ui.horizontal(|ui| {
                ui.heading("Foreclosure Details");
                if ui.button("Copy table").clicked() {
                    self.copy_table(ui.ctx());
                }
            });

            data_table::draw(ui, &self.view.rows);
        });
    }
}
