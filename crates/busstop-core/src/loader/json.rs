// crates/busstop-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::index::BusStopIndex;
use crate::model::BusStop;
use crate::text::SynonymTable;
use std::io::Read;
use std::path::Path;

/// Decodes a JSON array of stop records and builds a strict index.
pub fn load_from_reader<R: Read>(reader: R) -> Result<BusStopIndex> {
    let stops: Vec<BusStop> = serde_json::from_reader(reader)?;
    tracing::debug!(stops = stops.len(), "decoded bus stop JSON");
    BusStopIndex::try_new(stops)
}

pub fn load_from_path(path: &Path) -> Result<BusStopIndex> {
    let reader = common_io::open_stream(path)?;
    load_from_reader(reader)
}

impl SynonymTable {
    /// Reads a JSON object of `{"word": "abbreviation", ...}` pairs.
    ///
    /// `.json.gz` files are accepted when the `compact` feature is on.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let table: SynonymTable = serde_json::from_reader(reader)?;
        tracing::debug!(entries = table.len(), "loaded synonym table");
        Ok(table)
    }
}
