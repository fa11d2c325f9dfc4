// crates/busstop-core/src/lib.rs

//! # busstop-core
//!
//! An in-memory repository of bus stops answering three queries over a
//! static dataset:
//!
//! - **get**: exact lookup by stop code, O(1);
//! - **search**: ranked free-text search over description, road name and
//!   code, with a caller-supplied [`SynonymTable`] bridging user words and
//!   dataset abbreviations;
//! - **nearby**: stops within a radius of a point, nearest first, by
//!   great-circle distance.
//!
//! The [`BusStopIndex`] is built once and never mutated, so any number of
//! threads may query it without locking.
//!
//! ```
//! use busstop_core::prelude::*;
//!
//! let index = BusStopIndex::new(vec![
//!     BusStop::new("00481", "Woodlands Rd", "BT PANJANG TEMP BUS PK", 1.383764, 103.7583),
//!     BusStop::new("01012", "Victoria St", "Hotel Grand Pacific", 1.29684825487647, 103.85253591654006),
//! ]);
//! let synonyms: SynonymTable = [("park", "pk")].into_iter().collect();
//!
//! assert!(index.get("01012").is_some());
//! assert_eq!(index.search("bukit park", &synonyms, 0)[0].code(), "00481");
//! assert_eq!(index.nearby(1.3837, 103.75, 10_000.0, 0).len(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geo;
pub mod index;
pub mod loader;
pub mod model;
mod nearby;
pub mod repository;
pub mod score;
mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{Result, StopDbError};
pub use crate::geo::DistanceMetric;
pub use crate::index::BusStopIndex;
pub use crate::model::{BusStop, DbStats, NearbyStop, SearchHit};
pub use crate::repository::StopRepository;
pub use crate::score::MatchKind;
pub use crate::text::{SynonymTable, TextFolding};
pub use crate::traits::StopLookup;

/// Common types and traits in one import.
pub mod prelude {
    pub use crate::error::{Result, StopDbError};
    pub use crate::geo::{haversine_distance, DistanceMetric};
    pub use crate::index::BusStopIndex;
    pub use crate::model::{BusStop, DbStats, NearbyStop, SearchHit};
    pub use crate::repository::StopRepository;
    pub use crate::text::{fold_key, tokenize, SynonymTable, TextFolding};
    pub use crate::traits::StopLookup;
}
