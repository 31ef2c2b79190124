// src/config/state.rs
use std::collections::BTreeSet;

use super::consts::{WINDOW_H, WINDOW_W};
use super::options::LoadOptions;
use crate::filter::FilterOptions;

/// Interactive selection. Starts as "everything selected" once the
/// dataset's options are known; empty sets mean "show nothing".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub neighborhoods: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

impl Selection {
    pub fn all_of(options: &FilterOptions) -> Self {
        Self {
            neighborhoods: options.neighborhoods.iter().cloned().collect(),
            years: options.years.iter().copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty() || self.years.is_empty()
    }

    pub fn toggle_neighborhood(&mut self, name: &str) {
        if !self.neighborhoods.remove(name) {
            self.neighborhoods.insert(s!(name));
        }
    }

    pub fn toggle_year(&mut self, year: i32) {
        if !self.years.remove(&year) {
            self.years.insert(year);
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub selection: Selection,
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub load: LoadOptions,
    pub gui: GuiState,
}
