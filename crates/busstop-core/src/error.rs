// crates/busstop-core/src/error.rs
use thiserror::Error;

/// Errors raised while building or loading a [`BusStopIndex`](crate::BusStopIndex).
///
/// Queries (`get`, `search`, `nearby`) never fail; every variant here belongs
/// to construction or I/O.
#[derive(Debug, Error)]
pub enum StopDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported dataset format: {0}")]
    Unsupported(String),

    #[error("Duplicate bus stop code: {0}")]
    DuplicateCode(String),

    #[error("Invalid bus stop record {code:?}: {reason}")]
    InvalidRecord { code: String, reason: String },
}

pub type Result<T> = std::result::Result<T, StopDbError>;
