// crates/busstop-core/src/loader/cache.rs

//! Binary snapshot of an index, written with bincode.

use crate::error::{Result, StopDbError};
use crate::index::BusStopIndex;
use crate::model::BusStop;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Bumped whenever the on-disk layout of [`BusStop`] changes.
pub const CACHE_VERSION: u32 = 1;

/// Refuse to decode snapshots larger than this.
const MAX_CACHE_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Serialize, Deserialize)]
struct Snapshot<'a> {
    version: u32,
    stops: Cow<'a, [BusStop]>,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_CACHE_BYTES)
        .allow_trailing_bytes()
}

impl BusStopIndex {
    /// Serializes the stops, in load order, to the binary cache format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let snapshot = Snapshot {
            version: CACHE_VERSION,
            stops: Cow::Borrowed(self.stops()),
        };
        Ok(options().serialize(&snapshot)?)
    }

    /// Rebuilds an index from [`to_bytes`](Self::to_bytes) output.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let snapshot: Snapshot<'static> = options().deserialize(data)?;
        if snapshot.version != CACHE_VERSION {
            return Err(StopDbError::Unsupported(format!(
                "cache version {} (expected {CACHE_VERSION})",
                snapshot.version
            )));
        }
        BusStopIndex::try_new(snapshot.stops.into_owned())
    }

    /// Writes the binary cache to `path`, replacing any existing file.
    pub fn write_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = self.to_bytes()?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote bus stop cache");
        Ok(())
    }

    /// Reads a binary cache written by [`write_cache`](Self::write_cache).
    pub fn read_cache(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            StopDbError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
        })?;
        Self::from_bytes(&bytes)
    }
}
