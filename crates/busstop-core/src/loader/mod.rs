// crates/busstop-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads a static bus stop dataset from disk and builds a [`BusStopIndex`].
//! Handles the physical layer (files, gzip, binary cache) and delegates
//! record decoding to the JSON or bincode parsers.
//!
//! Supported inputs:
//! - `*.bin`: binary cache written by [`BusStopIndex::write_cache`]
//! - `*.json.gz`: gzip-compressed JSON (feature `compact`)
//! - anything else: a JSON array of stop records (feature `json`)

use crate::error::Result;
use crate::index::BusStopIndex;
use std::path::{Path, PathBuf};

pub mod cache;
pub mod common_io;

#[cfg(feature = "json")]
pub mod json;

/// Suffix appended to a source file name to form its cache file name.
pub const CACHE_SUFFIX: &str = "bin";

impl BusStopIndex {
    /// Directory holding the bundled sample dataset.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "bus_stops.json"
    }

    /// Loads the bundled sample dataset (through its cache when fresh).
    pub fn load_default() -> Result<Self> {
        let path = Self::default_data_dir().join(Self::default_dataset_filename());
        Self::load_cached(path)
    }

    /// Loads a dataset, choosing the parser from the file extension.
    ///
    /// Records are checked with [`BusStopIndex::try_new`], so duplicate codes
    /// and impossible coordinates are reported here rather than surfacing
    /// later as odd query results.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_binary_cache(path) {
            return Self::read_cache(path);
        }
        load_source(path)
    }

    /// Loads a JSON dataset, going through `<path>.bin` when it is present
    /// and not older than the source.
    ///
    /// On a cache miss the source is decoded and the cache is rewritten.
    /// Failing to write the cache is logged and otherwise ignored.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_binary_cache(path) {
            return Self::read_cache(path);
        }

        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1) Try binary cache first
        if common_io::cache_is_fresh(&cache_path, path) {
            match Self::read_cache(&cache_path) {
                Ok(index) => {
                    tracing::debug!(path = %cache_path.display(), stops = index.len(), "bus stop cache hit");
                    return Ok(index);
                }
                Err(e) => {
                    tracing::warn!(path = %cache_path.display(), error = %e, "ignoring unreadable bus stop cache");
                }
            }
        }

        // 2) Fallback: decode the source
        let index = load_source(path)?;
        tracing::info!(path = %path.display(), stops = index.len(), "loaded bus stops");

        // 3) Best-effort: write cache
        if let Err(e) = index.write_cache(&cache_path) {
            tracing::warn!(path = %cache_path.display(), error = %e, "could not write bus stop cache");
        }

        Ok(index)
    }
}

#[cfg(feature = "json")]
fn load_source(path: &Path) -> Result<BusStopIndex> {
    json::load_from_path(path)
}

#[cfg(not(feature = "json"))]
fn load_source(path: &Path) -> Result<BusStopIndex> {
    Err(crate::error::StopDbError::Unsupported(format!(
        "{} is not a binary cache; enable the `json` feature to read source datasets",
        path.display()
    )))
}
