// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_SOURCE;

/// How the loader treats a missing postal code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZipPolicy {
    /// Keep null; display code renders it as `0`.
    #[default]
    PreserveNull,
    /// Replace null with `0` in the canonical dataset.
    ZeroFill,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub source: PathBuf,
    pub zip_policy: ZipPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            zip_policy: ZipPolicy::default(),
        }
    }
}

impl LoadOptions {
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), ..Self::default() }
    }
}
