// crates/busstop-core/src/loader/common_io.rs
use crate::error::{Result, StopDbError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a dataset file, buffered, transparently gunzipping `*.gz` files.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        StopDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(StopDbError::Unsupported(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

pub fn is_binary_cache(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bin"))
}

/// `bus_stops.json` -> `bus_stops.json.bin`, in the same directory.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// True when `cache` exists and is at least as new as `source`.
///
/// If either timestamp is unavailable the cache is trusted as long as it exists.
pub fn cache_is_fresh(cache: &Path, source: &Path) -> bool {
    let Ok(cache_meta) = std::fs::metadata(cache) else {
        return false;
    };
    match (cache_meta.modified(), std::fs::metadata(source).and_then(|m| m.modified())) {
        (Ok(cache_time), Ok(source_time)) => cache_time >= source_time,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("data/bus_stops.json"), "bin");
        assert_eq!(p, Path::new("data/bus_stops.json.bin"));
    }

    #[test]
    fn detects_extensions() {
        assert!(is_gzip(Path::new("stops.json.gz")));
        assert!(!is_gzip(Path::new("stops.json")));
        assert!(is_binary_cache(Path::new("stops.json.bin")));
        assert!(!is_binary_cache(Path::new("stops.json")));
    }

    #[test]
    fn missing_file_is_not_found() {
        match open_stream(Path::new("/definitely/not/here.json")) {
            Err(StopDbError::NotFound(msg)) => assert!(msg.contains("here.json")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error"),
        }
    }
}
