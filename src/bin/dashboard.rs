// src/bin/dashboard.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use color_eyre::eyre::{eyre, Result};
use eframe::egui::ViewportBuilder;

use foreclosures::{
    config::{consts::APP_TITLE, state::DashboardState},
    gui,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let state = DashboardState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    gui::run(options, state).map_err(|e| eyre!("GUI failed: {e}"))
}
