// src/gui/components/mod.rs
pub mod bar_chart;
pub mod data_table;
pub mod filter_panel;
pub mod metric_cards;
