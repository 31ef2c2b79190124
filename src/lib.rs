// src/lib.rs
//! Louisville Metro foreclosure records: load, filter, summarize, and show.
//!
//! The dashboard host (see `gui`) owns a [`DatasetLoader`] and drives
//! everything through six calls: [`DatasetLoader::load`],
//! [`filter_options`], [`filter`], [`metrics`], [`counts_by_neighborhood`]
//! and [`for_display`].

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod csv;
pub mod schema;
pub mod table;
pub mod coerce;
pub mod address;
pub mod record;
pub mod loader;

pub mod filter;
pub mod metrics;
pub mod aggregate;
pub mod display;

pub mod gui;

pub use aggregate::{counts_by_neighborhood, NeighborhoodCount};
pub use display::{for_display, DisplayRow};
pub use error::{CoercionError, LoadError};
pub use filter::{filter, filter_options, FilterOptions};
pub use loader::{DatasetCache, DatasetLoader, MemoryCache, NoCache};
pub use metrics::{metrics, Metrics};
pub use record::{Record, RecordSet};
