// src/loader.rs
//! Source file → canonical `RecordSet`.
//!
//! Pipeline, in order: read → parse CSV → check header against the schema →
//! coerce → build `Address` → derive `Action_Year`. The result is shared as
//! `Arc<RecordSet>` and memoized through a `DatasetCache`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::address::build_address;
use crate::coerce::coerce;
use crate::config::consts::SOURCE_SEP;
use crate::config::options::{LoadOptions, ZipPolicy};
use crate::csv::{parse_rows, split_header};
use crate::error::{LoadError, Result};
use crate::record::{derive_filing_year, RecordSet};
use crate::schema::ColumnSchema;
use crate::table::RawTable;

/// What a cached dataset was built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: PathBuf,
    pub zip_policy: ZipPolicy,
}

impl From<&LoadOptions> for CacheKey {
    fn from(opts: &LoadOptions) -> Self {
        Self { source: opts.source.clone(), zip_policy: opts.zip_policy }
    }
}

/// Memoization seam for the loader. Implementations must hand every caller
/// for the same key the same `Arc`, and must not run `load` twice for a key
/// they still hold.
pub trait DatasetCache: Send + Sync {
    fn get_or_load(
        &self,
        key: &CacheKey,
        load: &mut dyn FnMut() -> Result<RecordSet>,
    ) -> Result<Arc<RecordSet>>;

    /// Forget whatever is cached.
    fn invalidate(&self);
}

/// Remembers the last loaded source. Asking for a different source drops
/// the old entry. The lock is held across `load`, so concurrent callers
/// parse once and then share the result.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slot: Mutex<Option<(CacheKey, Arc<RecordSet>)>>,
}

impl MemoryCache {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, Option<(CacheKey, Arc<RecordSet>)>> {
        // A panic mid-load leaves the slot untouched, so the data is still valid.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Key of the cached dataset, if any.
    pub fn cached_key(&self) -> Option<CacheKey> {
        self.lock().as_ref().map(|(k, _)| k.clone())
    }
}

impl DatasetCache for MemoryCache {
    fn get_or_load(
        &self,
        key: &CacheKey,
        load: &mut dyn FnMut() -> Result<RecordSet>,
    ) -> Result<Arc<RecordSet>> {
        let mut slot = self.lock();
        if let Some((cached, data)) = slot.as_ref() {
            if cached == key {
                logd!("Cache: hit {}", key.source.display());
                return Ok(Arc::clone(data));
            }
            logd!("Cache: source changed {} → {}", cached.source.display(), key.source.display());
        }
        *slot = None;
        let data = Arc::new(load()?);
        *slot = Some((key.clone(), Arc::clone(&data)));
        Ok(data)
    }

    fn invalidate(&self) {
        *self.lock() = None;
    }
}

/// Always loads. For tests and one-shot tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl DatasetCache for NoCache {
    fn get_or_load(
        &self,
        _key: &CacheKey,
        load: &mut dyn FnMut() -> Result<RecordSet>,
    ) -> Result<Arc<RecordSet>> {
        load().map(Arc::new)
    }

    fn invalidate(&self) {}
}

pub struct DatasetLoader<C: DatasetCache = MemoryCache> {
    schema: ColumnSchema,
    cache: C,
}

impl DatasetLoader<MemoryCache> {
    pub fn new() -> Self {
        Self::with_cache(MemoryCache::new())
    }
}

impl Default for DatasetLoader<MemoryCache> {
    fn default() -> Self { Self::new() }
}

impl<C: DatasetCache> DatasetLoader<C> {
    pub fn with_cache(cache: C) -> Self {
        Self { schema: ColumnSchema::foreclosures(), cache }
    }

    pub fn cache(&self) -> &C { &self.cache }

    /// Canonical dataset for `opts`, from cache when possible.
    pub fn load(&self, opts: &LoadOptions) -> Result<Arc<RecordSet>> {
        let key = CacheKey::from(opts);
        let schema = self.schema;
        self.cache.get_or_load(&key, &mut || read_source(&key.source, schema, key.zip_policy))
    }

    /// `load` with the default zip policy.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Arc<RecordSet>> {
        self.load(&LoadOptions::with_source(path.as_ref()))
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}

/// Uncached pipeline over a file.
pub fn read_source(path: &Path, schema: ColumnSchema, zip_policy: ZipPolicy) -> Result<RecordSet> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (header, rows) = split_header(parse_rows(&text, SOURCE_SEP))
        .ok_or_else(|| LoadError::Empty(path.to_path_buf()))?;

    let data = prepare(header, rows, schema, zip_policy)?;
    logf!("Load: {} records from {}", data.len(), path.display());
    Ok(data)
}

/// Uncached pipeline over already-split CSV rows.
pub fn prepare(
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    schema: ColumnSchema,
    zip_policy: ZipPolicy,
) -> Result<RecordSet> {
    schema.validate(&header)?;

    let raw = RawTable::from_rows(header, rows);
    let mut table = coerce(raw, &schema.types())?;
    build_address(&mut table, zip_policy);
    derive_filing_year(&mut table);

    Ok(RecordSet::from_table(&table))
}
